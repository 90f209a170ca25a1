pub mod errors;
pub mod frame;
pub mod indicators;
pub mod signal;

pub use errors::SignalError;
pub use frame::{IndicatorFrame, IndicatorRow};
pub use signal::{
    Side, SignalEvent, SignalParams, SignalReason, Trend, classify, compute_signal,
    compute_signal_with,
};
