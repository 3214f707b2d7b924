//! Wireless network interface trait

use crate::platform::Result;

/// Station-mode wireless link
///
/// Association internals (scan, DHCP, security negotiation) belong to the
/// platform; the node only needs to join, query the link and read its
/// signal strength.
#[allow(async_fn_in_trait)]
pub trait NetworkInterface {
    /// Attempt one association with the given access point
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Network` if the attempt fails. Callers decide
    /// whether and when to retry.
    async fn join(&mut self, ssid: &str, password: &str) -> Result<()>;

    /// Whether the link is currently up
    fn is_connected(&self) -> bool;

    /// Received signal strength of the current link (dBm)
    ///
    /// Implementations return 0 when no link is up.
    fn rssi(&self) -> i32;
}
