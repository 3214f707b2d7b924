//! Network association
//!
//! Association is a startup precondition of the sampling loop. Attempts are
//! retried forever at a fixed interval; only a shutdown request ends the
//! wait early.

use crate::core::scheduler::ShutdownSignal;
use crate::parameters::WifiParams;
use crate::platform::traits::{NetworkInterface, TimerInterface};

/// Pause between association attempts (ms)
pub const DEFAULT_JOIN_RETRY_MS: u32 = 100;

/// Result of [`associate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    /// Link is up after `attempts` join calls (0 if it already was)
    Connected { attempts: u32 },
    /// Shutdown requested before the link came up
    Cancelled { attempts: u32 },
}

/// Join the configured network, retrying until it succeeds
pub async fn associate<N, T>(
    network: &mut N,
    timer: &mut T,
    wifi: &WifiParams,
    retry_interval_ms: u32,
    shutdown: &ShutdownSignal,
) -> Association
where
    N: NetworkInterface,
    T: TimerInterface,
{
    if network.is_connected() {
        return Association::Connected { attempts: 0 };
    }

    let mut attempts: u32 = 0;
    loop {
        if shutdown.is_requested() {
            crate::log_warn!("WiFi association cancelled after {} attempts", attempts);
            return Association::Cancelled { attempts };
        }

        attempts = attempts.saturating_add(1);
        match network.join(wifi.ssid.as_str(), wifi.password.as_str()).await {
            Ok(()) => {
                crate::log_info!(
                    "WiFi connected to {} (attempt {}, rssi {})",
                    wifi.ssid.as_str(),
                    attempts,
                    network.rssi()
                );
                return Association::Connected { attempts };
            }
            Err(e) => {
                // Log the first failure and then every 50th to keep the console readable
                if attempts == 1 || attempts % 50 == 0 {
                    crate::log_warn!("WiFi join attempt {} failed: {:?}", attempts, e);
                }
                timer.delay_ms(retry_interval_ms).await;
            }
        }
    }
}
