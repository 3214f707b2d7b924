//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`defmt` feature): Uses defmt
//! - Host tests and `std` builds: Uses println!/eprintln!
//! - Otherwise: No-op
//!
//! Format strings must stay within the subset both backends accept: plain
//! `{}` and `{:?}` placeholders, no width or precision. Pre-format into a
//! [`LogLine`] when precision matters.

/// Fixed-capacity buffer for pre-formatted log lines
pub type LogLine = heapless::String<96>;

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}
