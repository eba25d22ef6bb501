//! Status macros shared by every crate in the workspace.
//!
//! They forward to `tracing`, so the subscriber installed by the binary decides
//! how (and whether) a line is rendered. `success!` events carry the
//! [`SUCCESS_TARGET`] target which the terminal formatter renders with its own glyph.

#[doc(hidden)]
pub use tracing as __tracing;

pub const SUCCESS_TARGET: &str = "seedscan::success";
pub const PRINT_TARGET: &str = "seedscan::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: "seedscan::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
