//! Logging macros
//!
//! The core logs through whichever backend the build selects:
//! - `defmt` (feature `embedded`) for deferred formatting over RTT
//! - the `log` facade (feature `log`, on with `std`)
//! - nothing, when neither is enabled
//!
//! Lines are `key=value` so a host-side collector can parse them. Arguments must
//! be plain scalars or `&str`, which both backends can format.

#[cfg(feature = "defmt")]
macro_rules! node_info {
    ($($arg:tt)*) => { defmt::info!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! node_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! node_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "defmt")]
macro_rules! node_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! node_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! node_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "defmt")]
macro_rules! node_error {
    ($($arg:tt)*) => { defmt::error!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! node_error {
    ($($arg:tt)*) => { log::error!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! node_error {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "defmt")]
macro_rules! node_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! node_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! node_debug {
    ($($arg:tt)*) => {};
}
