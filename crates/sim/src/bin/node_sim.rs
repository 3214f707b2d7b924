//! Run the form-tracking node on the host.
//!
//! The sensor is a simulated MPU-6050 replaying a motion script, the LED
//! echoes to the console and telemetry goes to a Realtime Database REST
//! endpoint (the emulator or an http proxy).
//!
//! Usage:
//!   cargo run -p ezto_sim --bin node_sim -- [OPTIONS]
//!
//! Unset options fall back to the values baked in at build time.

use std::env;
use std::process;
use std::time::Duration;

use ezto_core::scheduler::{LoopConfig, SensorFaultPolicy};
use ezto_node::core::scheduler::ShutdownSignal;
use ezto_node::core::startup::{run_node, NodeHardware};
use ezto_node::devices::imu::Mpu6050Config;
use ezto_node::devices::indicator::{Polarity, RgbIndicator};
use ezto_node::parameters::RawParams;
use ezto_sim::{
    HostSystem, MotionScript, RtdbStore, SimLed, SimMpu6050, SimNetwork, SystemWallClock,
    TokioTimer,
};

static SHUTDOWN: ShutdownSignal = ShutdownSignal::new();

#[derive(Default)]
struct Args {
    device_id: Option<String>,
    location: Option<String>,
    variant: Option<String>,
    ssid: Option<String>,
    password: Option<String>,
    store_url: Option<String>,
    store_secret: Option<String>,
    script: String,
    iterations: Option<u32>,
    period_ms: u32,
    timeout_ms: u32,
    halt_on_sensor_fault: bool,
    ad0_high: bool,
}

fn parse_args() -> Args {
    let defaults = LoopConfig::default();
    let mut args = Args {
        script: "mixed".to_string(),
        period_ms: defaults.period_ms,
        timeout_ms: defaults.publish_timeout_ms,
        ..Args::default()
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--device-id" => {
                i += 1;
                args.device_id = Some(string_arg(&raw, i, "device-id"));
            }
            "--location" => {
                i += 1;
                args.location = Some(string_arg(&raw, i, "location"));
            }
            "--variant" => {
                i += 1;
                args.variant = Some(string_arg(&raw, i, "variant"));
            }
            "--ssid" => {
                i += 1;
                args.ssid = Some(string_arg(&raw, i, "ssid"));
            }
            "--password" => {
                i += 1;
                args.password = Some(string_arg(&raw, i, "password"));
            }
            "--store-url" => {
                i += 1;
                args.store_url = Some(string_arg(&raw, i, "store-url"));
            }
            "--store-secret" => {
                i += 1;
                args.store_secret = Some(string_arg(&raw, i, "store-secret"));
            }
            "--script" => {
                i += 1;
                args.script = string_arg(&raw, i, "script");
            }
            "-n" | "--iterations" => {
                i += 1;
                args.iterations = Some(u32_arg(&raw, i, "iterations"));
            }
            "--period-ms" => {
                i += 1;
                args.period_ms = u32_arg(&raw, i, "period-ms");
            }
            "--timeout-ms" => {
                i += 1;
                args.timeout_ms = u32_arg(&raw, i, "timeout-ms");
            }
            "--halt-on-sensor-fault" => args.halt_on_sensor_fault = true,
            "--ad0-high" => args.ad0_high = true,
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    args
}

fn string_arg(raw: &[String], i: usize, name: &str) -> String {
    raw.get(i).cloned().unwrap_or_else(|| {
        eprintln!("Error: --{name} requires a value");
        process::exit(1);
    })
}

fn u32_arg(raw: &[String], i: usize, name: &str) -> u32 {
    string_arg(raw, i, name).parse().unwrap_or_else(|_| {
        eprintln!("Error: invalid value for --{name}");
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: node_sim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --device-id <ID>          Device identifier\n\
         \x20 --location <TEXT>         Location label\n\
         \x20 --variant <1|2|3>         Exercise variant\n\
         \x20 --ssid <SSID>             Access point name\n\
         \x20 --password <PASS>         Access point password\n\
         \x20 --store-url <URL>         Database base URL (http://)\n\
         \x20 --store-secret <SECRET>   Database secret\n\
         \x20 --script <NAME>           Motion script: rest, steady, mixed (default: mixed)\n\
         \x20 -n, --iterations <N>      Stop after N iterations (default: run until Ctrl+C)\n\
         \x20 --period-ms <MS>          Sleep between iterations (default: 100)\n\
         \x20 --timeout-ms <MS>         Publish timeout (default: 2000)\n\
         \x20 --halt-on-sensor-fault    Stop instead of skipping on sensor read errors\n\
         \x20 --ad0-high               Sensor strapped to the alternate address (0x69)\n\
         \x20 -h, --help                Show this help"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = parse_args();
    let built = RawParams::from_build_env();

    let raw = RawParams {
        device_id: args.device_id.as_deref().unwrap_or(built.device_id),
        location: args.location.as_deref().unwrap_or(built.location),
        variant: args.variant.as_deref().unwrap_or(built.variant),
        wifi_ssid: args.ssid.as_deref().unwrap_or(built.wifi_ssid),
        wifi_password: args.password.as_deref().unwrap_or(built.wifi_password),
        store_url: args.store_url.as_deref().unwrap_or(built.store_url),
        store_secret: args.store_secret.as_deref().unwrap_or(built.store_secret),
    };

    let script = MotionScript::preset(&args.script).unwrap_or_else(|| {
        eprintln!("Error: unknown script '{}'", args.script);
        process::exit(1);
    });

    let store = match RtdbStore::new(raw.store_url, raw.store_secret) {
        Ok(store) => store.with_io_timeout(Duration::from_millis(u64::from(args.timeout_ms))),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut config = LoopConfig {
        period_ms: args.period_ms,
        publish_timeout_ms: args.timeout_ms,
        ..LoopConfig::default()
    };
    if let Some(n) = args.iterations {
        config = config.bounded(n);
    }
    if args.halt_on_sensor_fault {
        config.sensor_fault_policy = SensorFaultPolicy::Halt;
    }

    println!("=== ezto node simulator ===");
    println!(
        "Device: {}, script: {}, store: {}",
        raw.device_id,
        args.script,
        store.endpoint().authority()
    );
    println!("Press Ctrl+C to stop.\n");

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nShutdown requested.");
            SHUTDOWN.request();
        }
    });

    let sensor = if args.ad0_high {
        Mpu6050Config::alternate_address()
    } else {
        Mpu6050Config::default()
    };

    let hw = NodeHardware {
        i2c: SimMpu6050::new(script).with_ad0(args.ad0_high),
        sensor,
        indicator: RgbIndicator::new(
            SimLed::new("red", 18),
            SimLed::new("green", 19),
            SimLed::new("blue", 23),
            Polarity::ActiveHigh,
        ),
        network: SimNetwork::new(),
        system: HostSystem::new(),
        store,
        timer: TokioTimer::new(),
        clock: SystemWallClock,
    };

    match run_node(&raw, hw, config, &SHUTDOWN).await {
        Ok(exit) => println!("Node stopped: {exit:?}"),
        Err(e) => {
            eprintln!("Startup failed: {e}");
            process::exit(1);
        }
    }
}
