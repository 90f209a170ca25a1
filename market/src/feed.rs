use async_trait::async_trait;

use crate::errors::MarketError;
use crate::types::PriceSeries;

/// Source of OHLCV bars for the signal engine.
///
/// A feed is asked for the most recent `limit` one-minute bars on every poll.
/// Implementations return a fresh series each time; the engine keeps nothing
/// between calls.
#[async_trait]
pub trait MarketFeed: Send {
    async fn fetch_ohlc(&mut self, symbol: &str, limit: usize) -> Result<PriceSeries, MarketError>;
}
