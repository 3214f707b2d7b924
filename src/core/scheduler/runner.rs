//! Sampling loop
//!
//! One iteration reads the sensor, classifies the sample, drives the
//! indicator, attaches resource metrics and publishes a snapshot. The loop
//! then sleeps for the configured period. Iterations never overlap.
//!
//! ## Fault handling
//!
//! - Indicator failure: logged and counted, reported as
//!   `led_operational = false` in the snapshot, loop continues
//! - Publish failure or timeout: logged and counted, snapshot discarded
//! - Sensor read failure: handled per [`SensorFaultPolicy`]

use core::fmt::Write;

use ezto_core::classifier::{classify, ExerciseVariant, StatusColor, Thresholds};
use ezto_core::imu::RawFrame;
use ezto_core::indicator::IndicatorState;
use ezto_core::scheduler::{LoopConfig, LoopStats, SensorFaultPolicy};
use ezto_core::telemetry::{format_timestamp, NodeIdentity, TelemetrySnapshot};
use ezto_core::traits::WallClock;

use super::shutdown::ShutdownSignal;
use crate::communication::telemetry::{DocumentStore, PublishOutcome, TelemetryPublisher};
use crate::core::logging::LogLine;
use crate::devices::traits::{ImuError, Indicator, MotionSensor};
use crate::platform::traits::TimerInterface;
use crate::subsystems::resources::ResourceMonitor;

/// Everything the loop touches, passed in explicitly
pub struct NodeContext<'p, M, L, R, S, T, C>
where
    S: DocumentStore,
{
    pub identity: NodeIdentity<'p>,
    pub variant: ExerciseVariant,
    pub thresholds: Thresholds,
    pub sensor: M,
    pub indicator: L,
    pub resources: R,
    pub publisher: TelemetryPublisher<S>,
    pub timer: T,
    pub clock: C,
}

/// Result of a single iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    /// Sample classified and a publish attempted
    Completed {
        color: StatusColor,
        led_operational: bool,
        outcome: PublishOutcome,
    },
    /// Sensor unavailable; nothing classified, actuated or published
    SensorUnavailable(ImuError),
}

/// Why [`LoopScheduler::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Shutdown,
    IterationLimit,
    SensorHalted(ImuError),
}

/// Fixed-cadence sampling loop
pub struct LoopScheduler<'p, M, L, R, S, T, C>
where
    S: DocumentStore,
{
    ctx: NodeContext<'p, M, L, R, S, T, C>,
    config: LoopConfig,
    frame: RawFrame,
    stats: LoopStats,
}

impl<'p, M, L, R, S, T, C> LoopScheduler<'p, M, L, R, S, T, C>
where
    M: MotionSensor,
    L: Indicator,
    R: ResourceMonitor,
    S: DocumentStore,
    T: TimerInterface,
    C: WallClock,
{
    pub fn new(ctx: NodeContext<'p, M, L, R, S, T, C>, config: LoopConfig) -> Self {
        Self {
            ctx,
            config,
            frame: RawFrame::new(),
            stats: LoopStats::default(),
        }
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    pub fn context(&self) -> &NodeContext<'p, M, L, R, S, T, C> {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut NodeContext<'p, M, L, R, S, T, C> {
        &mut self.ctx
    }

    /// Run one iteration (without the trailing sleep)
    pub async fn step(&mut self) -> Iteration {
        let started_us = self.ctx.timer.now_us();

        let sample = match self.ctx.sensor.read_sample(&mut self.frame) {
            Ok(sample) => sample,
            Err(e) => {
                self.stats.record_sensor_fault();
                crate::log_warn!("Sensor unavailable: {:?}", e);
                self.finish(started_us);
                return Iteration::SensorUnavailable(e);
            }
        };

        let color = classify(&sample, self.ctx.variant, &self.ctx.thresholds);

        let led_operational = match self.ctx.indicator.show(IndicatorState::for_color(color)) {
            Ok(()) => true,
            Err(e) => {
                self.stats.record_indicator_fault();
                crate::log_warn!("Indicator write failed: {:?}", e);
                false
            }
        };

        let unix_time_ms = self.ctx.clock.unix_time_ms();
        let snapshot = TelemetrySnapshot::new(
            self.ctx.identity,
            sample,
            color,
            led_operational,
            self.ctx.resources.sample(),
            unix_time_ms,
        );

        let mut line = LogLine::new();
        let timestamp = format_timestamp(unix_time_ms).unwrap_or_default();
        if write!(
            line,
            "{} {} AX{:.2} GY{:.1}",
            timestamp.as_str(),
            color.label(),
            sample.accel.x,
            sample.gyro.x
        )
        .is_ok()
        {
            crate::log_debug!("{}", line.as_str());
        }

        let outcome = self
            .ctx
            .publisher
            .publish(&snapshot, &mut self.ctx.timer)
            .await;
        match outcome {
            PublishOutcome::Delivered => self.stats.record_delivered(),
            PublishOutcome::Failed(e) => {
                self.stats.record_publish_failure();
                crate::log_warn!("Publish failed: {:?}", e);
            }
            PublishOutcome::TimedOut => {
                self.stats.record_publish_timeout();
                crate::log_warn!(
                    "Publish timed out after {} ms",
                    self.ctx.publisher.timeout_ms()
                );
            }
        }

        self.finish(started_us);
        Iteration::Completed {
            color,
            led_operational,
            outcome,
        }
    }

    /// Run until shutdown, the iteration limit or a halting sensor fault
    pub async fn run(&mut self, shutdown: &ShutdownSignal) -> LoopExit {
        crate::log_info!(
            "Sampling loop started (period {} ms, publish timeout {} ms)",
            self.config.period_ms,
            self.config.publish_timeout_ms
        );

        let mut completed: u32 = 0;
        let exit = loop {
            if shutdown.is_requested() {
                break LoopExit::Shutdown;
            }
            if self.config.is_exhausted(completed) {
                break LoopExit::IterationLimit;
            }

            if let Iteration::SensorUnavailable(e) = self.step().await {
                if self.config.sensor_fault_policy == SensorFaultPolicy::Halt {
                    break LoopExit::SensorHalted(e);
                }
            }
            completed = completed.saturating_add(1);

            if self.config.is_exhausted(completed) {
                break LoopExit::IterationLimit;
            }
            self.ctx.timer.delay_ms(self.config.period_ms).await;
        };

        crate::log_info!(
            "Sampling loop stopped after {} iterations: {} published, {} failed, {} timed out, {} sensor faults",
            self.stats.iterations,
            self.stats.published,
            self.stats.publish_failures,
            self.stats.publish_timeouts,
            self.stats.sensor_faults
        );
        exit
    }

    fn finish(&mut self, started_us: u64) {
        let elapsed = self.ctx.timer.elapsed_since(started_us);
        let execution_us = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.stats
            .record_iteration(execution_us, self.config.budget_us());
    }
}
