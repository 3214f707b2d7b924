//! Resource metrics
//!
//! Collects the link-quality and free-memory figures reported with every
//! telemetry snapshot.

use ezto_core::telemetry::ResourceMetrics;

use crate::platform::traits::{NetworkInterface, SystemInterface};

/// Source of per-iteration resource metrics
pub trait ResourceMonitor {
    /// Wireless link quality (RSSI, dBm; 0 when down)
    fn link_quality(&self) -> i32;

    /// Free heap memory (bytes)
    fn free_memory(&self) -> i32;

    fn sample(&self) -> ResourceMetrics {
        ResourceMetrics {
            link_quality: self.link_quality(),
            free_memory: self.free_memory(),
        }
    }
}

/// Resource monitor backed by the platform network and system interfaces
pub struct PlatformResources<N, S> {
    network: N,
    system: S,
}

impl<N: NetworkInterface, S: SystemInterface> PlatformResources<N, S> {
    pub fn new(network: N, system: S) -> Self {
        Self { network, system }
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut N {
        &mut self.network
    }

    pub fn system_mut(&mut self) -> &mut S {
        &mut self.system
    }
}

impl<N: NetworkInterface, S: SystemInterface> ResourceMonitor for PlatformResources<N, S> {
    fn link_quality(&self) -> i32 {
        self.network.rssi()
    }

    fn free_memory(&self) -> i32 {
        self.system.free_memory()
    }
}
