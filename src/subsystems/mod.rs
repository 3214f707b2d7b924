//! Node subsystems
//!
//! - [`resources`]: Link quality and memory metrics attached to telemetry

pub mod resources;

pub use resources::{PlatformResources, ResourceMonitor};
