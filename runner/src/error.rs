use engine::SignalError;
use market::MarketError;
use thiserror::Error;

/// Failures that end a single poll. The driver logs them and keeps polling.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("market data: {0}")]
    Market(#[from] MarketError),

    #[error("signal computation: {0}")]
    Signal(#[from] SignalError),
}
