//! Core types for the sampling loop
//!
//! - Loop configuration (cadence, publish timeout, iteration bound)
//! - Sensor fault policy
//! - Loop statistics (runtime monitoring)

/// Nominal pause between iterations (ms)
pub const DEFAULT_PERIOD_MS: u32 = 100;

/// Upper bound on one publish attempt (ms)
pub const DEFAULT_PUBLISH_TIMEOUT_MS: u32 = 2_000;

/// What the loop does when a steady-state sensor read fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorFaultPolicy {
    /// Skip this iteration: no classification, no indicator change, no publish
    #[default]
    SkipIteration,
    /// Stop the loop and report the fault to the caller
    Halt,
}

/// Loop configuration fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Sleep between iterations in milliseconds
    pub period_ms: u32,

    /// Time allowed for a single upsert before it is abandoned
    pub publish_timeout_ms: u32,

    /// Stop after this many iterations (`None` runs until shutdown)
    pub max_iterations: Option<u32>,

    /// Handling of steady-state sensor read failures
    pub sensor_fault_policy: SensorFaultPolicy,
}

impl LoopConfig {
    /// Execution budget for one iteration in microseconds
    ///
    /// An iteration whose work (excluding the inter-iteration sleep) exceeds
    /// one period counts as an overrun.
    #[inline]
    pub const fn budget_us(&self) -> u32 {
        self.period_ms.saturating_mul(1000)
    }

    /// Copy of this configuration bounded to `iterations`
    pub const fn bounded(mut self, iterations: u32) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Whether the loop should stop after `completed` iterations
    #[inline]
    pub fn is_exhausted(&self, completed: u32) -> bool {
        matches!(self.max_iterations, Some(limit) if completed >= limit)
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            publish_timeout_ms: DEFAULT_PUBLISH_TIMEOUT_MS,
            max_iterations: None,
            sensor_fault_policy: SensorFaultPolicy::SkipIteration,
        }
    }
}

/// Runtime statistics for the sampling loop
///
/// Counters saturate rather than wrap. Timing fields cover the work of one
/// iteration, not the sleep that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopStats {
    /// Iterations started (including skipped ones)
    pub iterations: u32,

    /// Snapshots the store acknowledged
    pub published: u32,

    /// Upserts rejected or failed by the store
    pub publish_failures: u32,

    /// Upserts abandoned after the publish timeout
    pub publish_timeouts: u32,

    /// Steady-state sensor read failures
    pub sensor_faults: u32,

    /// Indicator writes that failed
    pub indicator_faults: u32,

    /// Iterations whose work exceeded the budget
    pub overruns: u32,

    /// Last iteration time in microseconds
    pub last_iteration_us: u32,

    /// Average iteration time in microseconds (exponential moving average)
    ///
    /// EMA with alpha = 0.1.
    pub avg_iteration_us: u32,

    /// Maximum iteration time observed in microseconds
    pub max_iteration_us: u32,
}

impl LoopStats {
    /// Record the timing of a finished iteration
    pub fn record_iteration(&mut self, execution_us: u32, budget_us: u32) {
        self.iterations = self.iterations.saturating_add(1);
        self.last_iteration_us = execution_us;

        // avg_new = (value + 9 * avg_old) / 10
        if self.avg_iteration_us == 0 {
            self.avg_iteration_us = execution_us;
        } else {
            let avg = (u64::from(execution_us) + 9 * u64::from(self.avg_iteration_us)) / 10;
            self.avg_iteration_us = avg as u32;
        }

        if execution_us > self.max_iteration_us {
            self.max_iteration_us = execution_us;
        }

        if execution_us > budget_us {
            self.overruns = self.overruns.saturating_add(1);
        }
    }

    pub fn record_delivered(&mut self) {
        self.published = self.published.saturating_add(1);
    }

    pub fn record_publish_failure(&mut self) {
        self.publish_failures = self.publish_failures.saturating_add(1);
    }

    pub fn record_publish_timeout(&mut self) {
        self.publish_timeouts = self.publish_timeouts.saturating_add(1);
    }

    pub fn record_sensor_fault(&mut self) {
        self.sensor_faults = self.sensor_faults.saturating_add(1);
    }

    pub fn record_indicator_fault(&mut self) {
        self.indicator_faults = self.indicator_faults.saturating_add(1);
    }

    /// Publish attempts made, whatever their outcome
    pub fn publish_attempts(&self) -> u32 {
        self.published
            .saturating_add(self.publish_failures)
            .saturating_add(self.publish_timeouts)
    }
}
