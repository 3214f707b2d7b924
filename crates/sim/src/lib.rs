pub mod error;
pub mod motion;
pub mod platform;
pub mod store;

pub use error::SimError;
pub use motion::{MotionPhase, MotionScript};
pub use platform::{HostSystem, SimLed, SimMpu6050, SimNetwork, SystemWallClock, TokioTimer};
pub use store::{RtdbEndpoint, RtdbStore};
