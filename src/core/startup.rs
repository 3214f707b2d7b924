//! Startup sequence
//!
//! 1. Validate the static configuration
//! 2. Configure the indicator outputs (all channels off)
//! 3. Associate with the wireless network (retried until it succeeds)
//! 4. Initialize the motion sensor
//! 5. Assemble the loop context and run until shutdown
//!
//! Configuration and sensor failures are fatal. Association is only
//! abandoned on shutdown. An indicator that cannot be configured is logged
//! and the node runs without visual feedback.

use core::fmt;

use ezto_core::classifier::Thresholds;
use ezto_core::scheduler::LoopConfig;
use ezto_core::telemetry::NodeIdentity;
use ezto_core::traits::WallClock;

use super::scheduler::{LoopExit, LoopScheduler, NodeContext, ShutdownSignal};
use crate::communication::network::{associate, Association, DEFAULT_JOIN_RETRY_MS};
use crate::communication::telemetry::{DocumentStore, TelemetryPublisher};
use crate::devices::imu::{Mpu6050, Mpu6050Config};
use crate::devices::traits::{ImuError, Indicator};
use crate::parameters::{ConfigError, NodeParams, RawParams};
use crate::platform::traits::{I2cInterface, NetworkInterface, SystemInterface, TimerInterface};
use crate::subsystems::resources::PlatformResources;

/// Fatal startup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    Config(ConfigError),
    /// Shutdown requested before the network came up
    Cancelled,
    /// Sensor initialization failed
    Sensor(ImuError),
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<ImuError> for StartupError {
    fn from(e: ImuError) -> Self {
        StartupError::Sensor(e)
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "{}", e),
            StartupError::Cancelled => write!(f, "startup cancelled"),
            StartupError::Sensor(e) => write!(f, "sensor initialization failed: {}", e),
        }
    }
}

/// Peripherals and services handed over by the board or host harness
pub struct NodeHardware<I, L, N, Y, S, T, C> {
    pub i2c: I,
    /// Sensor strapping and ranges; the ranges fix the sample scale
    pub sensor: Mpu6050Config,
    pub indicator: L,
    pub network: N,
    pub system: Y,
    pub store: S,
    pub timer: T,
    pub clock: C,
}

/// Scheduler type produced by [`bring_up`]
pub type Node<'p, I, L, N, Y, S, T, C> =
    LoopScheduler<'p, Mpu6050<I>, L, PlatformResources<N, Y>, S, T, C>;

/// Bring the node from validated configuration to a ready scheduler
pub async fn bring_up<'p, I, L, N, Y, S, T, C>(
    params: &'p NodeParams,
    hw: NodeHardware<I, L, N, Y, S, T, C>,
    config: LoopConfig,
    shutdown: &ShutdownSignal,
) -> Result<Node<'p, I, L, N, Y, S, T, C>, StartupError>
where
    I: I2cInterface,
    L: Indicator,
    N: NetworkInterface,
    Y: SystemInterface,
    S: DocumentStore,
    T: TimerInterface,
    C: WallClock,
{
    let NodeHardware {
        i2c,
        sensor,
        mut indicator,
        mut network,
        system,
        store,
        mut timer,
        clock,
    } = hw;

    crate::log_info!(
        "Starting node {} ({})",
        params.device.device_id.as_str(),
        params.device.location.as_str()
    );

    if let Err(e) = indicator.init() {
        crate::log_warn!("Indicator setup failed: {}", e);
    }

    match associate(
        &mut network,
        &mut timer,
        &params.wifi,
        DEFAULT_JOIN_RETRY_MS,
        shutdown,
    )
    .await
    {
        Association::Connected { .. } => {}
        Association::Cancelled { .. } => return Err(StartupError::Cancelled),
    }

    let mut sensor = Mpu6050::new(i2c, sensor);
    sensor.init()?;

    let ctx = NodeContext {
        identity: NodeIdentity {
            device_id: params.device.device_id.as_str(),
            location: params.device.location.as_str(),
        },
        variant: params.device.variant,
        thresholds: Thresholds::DEFAULT,
        sensor,
        indicator,
        resources: PlatformResources::new(network, system),
        publisher: TelemetryPublisher::new(store, config.publish_timeout_ms),
        timer,
        clock,
    };

    Ok(LoopScheduler::new(ctx, config))
}

/// Validate `raw`, bring the node up and run the loop to completion
pub async fn run_node<I, L, N, Y, S, T, C>(
    raw: &RawParams<'_>,
    hw: NodeHardware<I, L, N, Y, S, T, C>,
    config: LoopConfig,
    shutdown: &ShutdownSignal,
) -> Result<LoopExit, StartupError>
where
    I: I2cInterface,
    L: Indicator,
    N: NetworkInterface,
    Y: SystemInterface,
    S: DocumentStore,
    T: TimerInterface,
    C: WallClock,
{
    let params = NodeParams::load(raw).inspect_err(|e| {
        crate::log_error!("Configuration rejected: {:?}", e);
    })?;

    let mut node = bring_up(&params, hw, config, shutdown)
        .await
        .inspect_err(|e| crate::log_error!("Startup failed: {:?}", e))?;

    Ok(node.run(shutdown).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communication::telemetry::MockDocumentStore;
    use crate::devices::imu::AccelRange;
    use crate::devices::indicator::{Polarity, RgbIndicator};
    use crate::parameters::tests::raw;
    use crate::platform::mock::{
        I2cTransaction, MockGpio, MockI2c, MockNetwork, MockSystem, MockTimer,
    };
    use crate::platform::traits::{GpioInterface, GpioMode};
    use ezto_core::imu::RawFrame;
    use ezto_core::traits::MockWallClock;

    type TestHardware<'c> = NodeHardware<
        MockI2c,
        RgbIndicator<MockGpio>,
        MockNetwork,
        MockSystem,
        MockDocumentStore,
        MockTimer,
        &'c MockWallClock,
    >;

    fn hardware(clock: &MockWallClock, network: MockNetwork) -> TestHardware<'_> {
        let mut i2c = MockI2c::new();
        i2c.set_default_read(RawFrame::encode([16384, 0, 0], 0, [0, 0, 0]).as_bytes());
        NodeHardware {
            i2c,
            sensor: Mpu6050Config::default(),
            indicator: RgbIndicator::new(
                MockGpio::new_input(),
                MockGpio::new_input(),
                MockGpio::new_input(),
                Polarity::ActiveLow,
            ),
            network,
            system: MockSystem::default(),
            store: MockDocumentStore::new(),
            timer: MockTimer::new(),
            clock,
        }
    }

    #[tokio::test]
    async fn test_bring_up_order() {
        let clock = MockWallClock::at(1_709_987_696_000);
        let params = NodeParams::load(&raw()).unwrap();

        let node = bring_up(
            &params,
            hardware(&clock, MockNetwork::failing(2)),
            LoopConfig::default(),
            &ShutdownSignal::new(),
        )
        .await
        .unwrap();

        let ctx = node.context();
        assert_eq!(ctx.identity.device_id, "esp32-pulsera-01");
        assert_eq!(ctx.resources.network().join_attempts(), 3);
        assert_eq!(ctx.timer.delays_ms(), &[100, 100]);
        assert_eq!(
            ctx.sensor.bus().transactions()[0],
            I2cTransaction::Write {
                addr: 0x68,
                data: vec![0x6B, 0x00]
            }
        );
    }

    #[tokio::test]
    async fn test_bring_up_alternate_address() {
        let clock = MockWallClock::at(1_709_987_696_000);
        let params = NodeParams::load(&raw()).unwrap();
        let mut hw = hardware(&clock, MockNetwork::new());
        hw.sensor = Mpu6050Config {
            accel_range: AccelRange::G8,
            ..Mpu6050Config::alternate_address()
        };

        let node = bring_up(&params, hw, LoopConfig::default(), &ShutdownSignal::new())
            .await
            .unwrap();

        let sensor = &node.context().sensor;
        assert_eq!(sensor.scale().accel_lsb_per_g, 4096.0);
        for t in sensor.bus().transactions() {
            assert!(matches!(t, I2cTransaction::Write { addr: 0x69, .. }));
        }
        assert_eq!(
            sensor.bus().transactions()[4],
            I2cTransaction::Write {
                addr: 0x69,
                data: vec![0x1C, 0x10]
            }
        );
    }

    #[tokio::test]
    async fn test_indicator_configured_dark() {
        let clock = MockWallClock::at(0);
        let params = NodeParams::load(&raw()).unwrap();

        let node = bring_up(
            &params,
            hardware(&clock, MockNetwork::new()),
            LoopConfig::default(),
            &ShutdownSignal::new(),
        )
        .await
        .unwrap();

        let indicator = &node.context().indicator;
        assert!(indicator.pins().iter().all(|p| p.mode() == GpioMode::OutputPushPull));
        assert_eq!(indicator.channels(), [false, false, false]);
        // Active-low: off means driven high
        assert!(indicator.pins().iter().all(|p| p.read()));
    }

    #[tokio::test]
    async fn test_missing_config_is_fatal() {
        let clock = MockWallClock::at(0);
        let values = RawParams {
            wifi_ssid: "",
            ..raw()
        };

        let result = run_node(
            &values,
            hardware(&clock, MockNetwork::new()),
            LoopConfig::default().bounded(1),
            &ShutdownSignal::new(),
        )
        .await;

        assert_eq!(
            result,
            Err(StartupError::Config(ConfigError::Missing("WIFI_SSID")))
        );
    }

    #[tokio::test]
    async fn test_sensor_init_failure_is_fatal() {
        let clock = MockWallClock::at(0);
        let params = NodeParams::load(&raw()).unwrap();
        let mut hw = hardware(&clock, MockNetwork::new());
        hw.i2c.fail_writes_to(0x6B);

        let result = bring_up(&params, hw, LoopConfig::default(), &ShutdownSignal::new()).await;

        assert!(matches!(
            result,
            Err(StartupError::Sensor(ImuError::InitFailed(0x6B)))
        ));
    }

    #[tokio::test]
    async fn test_shutdown_during_association() {
        let clock = MockWallClock::at(0);
        let params = NodeParams::load(&raw()).unwrap();
        let shutdown = ShutdownSignal::new();
        shutdown.request();

        let result = bring_up(
            &params,
            hardware(&clock, MockNetwork::failing(u32::MAX)),
            LoopConfig::default(),
            &shutdown,
        )
        .await;

        assert!(matches!(result, Err(StartupError::Cancelled)));
    }

    #[tokio::test]
    async fn test_run_node_end_to_end() {
        let clock = MockWallClock::at(1_709_987_696_000);

        let exit = run_node(
            &raw(),
            hardware(&clock, MockNetwork::new()),
            LoopConfig::default().bounded(4),
            &ShutdownSignal::new(),
        )
        .await;

        assert_eq!(exit, Ok(LoopExit::IterationLimit));
    }
}
