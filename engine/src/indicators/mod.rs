//! Column indicators over close prices.
//!
//! Each function returns one entry per input value. Entries without enough
//! history are `None` rather than a placeholder number, so callers cannot
//! mistake warm-up output for a real reading.

pub mod ema;
pub mod rsi;

pub use ema::ema;
pub use rsi::rsi;
