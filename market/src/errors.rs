use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("invalid price distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("feed unavailable for {symbol}: {reason}")]
    Unavailable { symbol: String, reason: String },
}
