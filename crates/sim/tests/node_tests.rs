use ezto_core::scheduler::LoopConfig;
use ezto_core::traits::MockWallClock;
use ezto_node::communication::telemetry::MockDocumentStore;
use ezto_node::core::scheduler::{LoopExit, ShutdownSignal};
use ezto_node::core::startup::{bring_up, run_node, NodeHardware, StartupError};
use ezto_node::devices::imu::Mpu6050Config;
use ezto_node::devices::indicator::{Polarity, RgbIndicator};
use ezto_node::parameters::{NodeParams, RawParams};
use ezto_sim::{
    HostSystem, MotionPhase, MotionScript, SimLed, SimMpu6050, SimNetwork, TokioTimer,
};

// 2024-03-09T12:34:56Z
const T0_MS: u64 = 1_709_987_696_000;

fn raw() -> RawParams<'static> {
    RawParams {
        device_id: "esp32-pulsera-01",
        location: "pulsera mano derecha",
        variant: "1",
        wifi_ssid: "gym-floor",
        wifi_password: "hunter22",
        store_url: "http://127.0.0.1:9000",
        store_secret: "s3cr3t",
    }
}

fn leds() -> RgbIndicator<SimLed> {
    RgbIndicator::new(
        SimLed::quiet("red", 18),
        SimLed::quiet("green", 19),
        SimLed::quiet("blue", 23),
        Polarity::ActiveHigh,
    )
}

fn hardware(
    script: MotionScript,
    clock: &MockWallClock,
) -> NodeHardware<
    SimMpu6050,
    RgbIndicator<SimLed>,
    SimNetwork,
    HostSystem,
    MockDocumentStore,
    TokioTimer,
    &MockWallClock,
> {
    NodeHardware {
        i2c: SimMpu6050::new(script),
        sensor: Mpu6050Config::default(),
        indicator: leds(),
        network: SimNetwork::expecting("gym-floor"),
        system: HostSystem::new(),
        store: MockDocumentStore::new(),
        timer: TokioTimer::new(),
        clock,
    }
}

#[tokio::test(start_paused = true)]
async fn node_classifies_scripted_motion() {
    let clock = MockWallClock::at(T0_MS);
    let params = NodeParams::load(&raw()).unwrap();
    // Variant 1 tracks the Y axis: twist on Y, then a clean rep
    let script = MotionScript::new(vec![
        MotionPhase::new(1, [1.0, 0.4, 0.2], [5.0, 40.0, 10.0]),
        MotionPhase::new(1, [1.0, 0.4, 0.2], [50.0, 10.0, 20.0]),
    ]);

    let mut node = bring_up(
        &params,
        hardware(script, &clock),
        LoopConfig::default(),
        &ShutdownSignal::new(),
    )
    .await
    .unwrap();

    assert!(node.context().sensor.bus().is_awake());
    assert_eq!(node.context().sensor.bus().register(0x19), 0x04);

    node.step().await;
    assert_eq!(node.context().indicator.channels(), [true, false, false]);
    let doc = node
        .context()
        .publisher
        .store()
        .get("lecturas_iot", "2024-03-09T12:34:56Z_esp32-pulsera-01")
        .unwrap()
        .clone();
    assert_eq!(doc["lecturas"]["led_color"], "rojo");

    clock.advance_ms(1000);
    node.step().await;
    assert_eq!(node.context().indicator.channels(), [false, true, false]);
    assert_eq!(node.context().publisher.store().documents().len(), 2);
    assert!(doc["lecturas"]["free_heap"].as_i64().unwrap() > 0);
}

#[tokio::test(start_paused = true)]
async fn node_runs_bounded_at_cadence() {
    let clock = MockWallClock::at(T0_MS);
    let timer = TokioTimer::new();
    let started = tokio::time::Instant::now();

    let exit = run_node(
        &raw(),
        NodeHardware {
            timer,
            ..hardware(MotionScript::steady(), &clock)
        },
        LoopConfig::default().bounded(5),
        &ShutdownSignal::new(),
    )
    .await;

    assert_eq!(exit, Ok(LoopExit::IterationLimit));
    // Four sleeps between five iterations
    assert!(started.elapsed() >= std::time::Duration::from_millis(400));
}

#[tokio::test]
async fn wrong_network_never_associates_until_shutdown() {
    let clock = MockWallClock::at(T0_MS);
    let shutdown = ShutdownSignal::new();
    let values = RawParams {
        wifi_ssid: "lobby",
        ..raw()
    };

    let run = run_node(
        &values,
        hardware(MotionScript::steady(), &clock),
        LoopConfig::default(),
        &shutdown,
    );
    let stop = async {
        tokio::time::sleep(std::time::Duration::from_millis(350)).await;
        shutdown.request();
    };
    let (result, ()) = tokio::join!(run, stop);

    assert_eq!(result, Err(StartupError::Cancelled));
}

#[tokio::test(start_paused = true)]
async fn sensor_strapped_high_answers_at_alternate_address() {
    let clock = MockWallClock::at(T0_MS);
    let params = NodeParams::load(&raw()).unwrap();
    let script = MotionScript::steady();

    // Default configuration talks to 0x68 and gets no answer
    let mut hw = hardware(script.clone(), &clock);
    hw.i2c = SimMpu6050::new(script.clone()).with_ad0(true);
    let result = bring_up(&params, hw, LoopConfig::default(), &ShutdownSignal::new()).await;
    assert!(matches!(result, Err(StartupError::Sensor(_))));

    let mut hw = hardware(script.clone(), &clock);
    hw.i2c = SimMpu6050::new(script).with_ad0(true);
    hw.sensor = Mpu6050Config::alternate_address();
    let mut node = bring_up(&params, hw, LoopConfig::default(), &ShutdownSignal::new())
        .await
        .unwrap();

    assert!(node.context().sensor.bus().is_awake());
    node.step().await;
    assert_eq!(node.context().sensor.bus().bursts(), 1);
}

#[tokio::test]
async fn unplugged_sensor_fails_startup() {
    let clock = MockWallClock::at(T0_MS);
    let mut hw = hardware(MotionScript::steady(), &clock);
    hw.i2c.set_connected(false);

    let result = run_node(&raw(), hw, LoopConfig::default(), &ShutdownSignal::new()).await;

    assert!(matches!(result, Err(StartupError::Sensor(_))));
}
