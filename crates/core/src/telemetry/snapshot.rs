//! Per-iteration telemetry snapshot
//!
//! A snapshot is assembled once per loop iteration from the sample, its
//! classification, the indicator state and the resource metrics. It is
//! immutable after construction and consumed by exactly one publish attempt.

use crate::classifier::StatusColor;
use crate::imu::Sample;
use crate::indicator::IndicatorState;

use super::document::{Readings, TelemetryDocument};
use super::key::{document_key, DocumentKey, KeyError};

/// Runtime resource metrics attached to each snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceMetrics {
    /// Wireless link quality (RSSI, dBm)
    pub link_quality: i32,
    /// Free heap memory (bytes)
    pub free_memory: i32,
}

/// Node identity attached to every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeIdentity<'a> {
    pub device_id: &'a str,
    pub location: &'a str,
}

/// Telemetry snapshot for one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot<'a> {
    identity: NodeIdentity<'a>,
    sample: Sample,
    color: StatusColor,
    indicator: IndicatorState,
    led_operational: bool,
    resources: ResourceMetrics,
    unix_time_ms: u64,
}

impl<'a> TelemetrySnapshot<'a> {
    /// Assemble a snapshot. The indicator state is derived from `color`;
    /// `led_operational` records whether actuating it succeeded.
    pub fn new(
        identity: NodeIdentity<'a>,
        sample: Sample,
        color: StatusColor,
        led_operational: bool,
        resources: ResourceMetrics,
        unix_time_ms: u64,
    ) -> Self {
        Self {
            identity,
            sample,
            color,
            indicator: IndicatorState::for_color(color),
            led_operational,
            resources,
            unix_time_ms,
        }
    }

    pub fn identity(&self) -> NodeIdentity<'a> {
        self.identity
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn color(&self) -> StatusColor {
        self.color
    }

    pub fn indicator(&self) -> IndicatorState {
        self.indicator
    }

    pub fn resources(&self) -> ResourceMetrics {
        self.resources
    }

    pub fn unix_time_ms(&self) -> u64 {
        self.unix_time_ms
    }

    /// Store key for this snapshot (second resolution).
    pub fn document_key(&self) -> Result<DocumentKey, KeyError> {
        document_key(self.unix_time_ms, self.identity.device_id)
    }

    /// Document body for the store.
    pub fn to_document(&self) -> TelemetryDocument<'a> {
        TelemetryDocument {
            device_id: self.identity.device_id,
            location: self.identity.location,
            lecturas: Readings::from_snapshot(self),
        }
    }

    pub(crate) fn led_operational(&self) -> bool {
        self.led_operational
    }
}
