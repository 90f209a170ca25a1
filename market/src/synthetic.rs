//! Synthetic OHLCV feed
//!
//! Stand-in for a real market-data API. Every call starts a brand-new random
//! walk from `BASE_PRICE`; there is no continuity between calls.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::errors::MarketError;
use crate::feed::MarketFeed;
use crate::types::{PriceBar, PriceSeries};

pub const BASE_PRICE: f64 = 1.20;
pub const BASE_VOLUME: u64 = 100;

const CLOSE_STEP_SD: f64 = 0.0005;
const OPEN_NOISE_SD: f64 = 0.0001;
const WICK_SD: f64 = 0.0002;
const VOLUME_SPREAD: u64 = 50;

/// Random-walk bar generator.
///
/// The RNG is injected so tests can pin a seed. Production uses
/// [`SyntheticFeed::from_entropy`].
pub struct SyntheticFeed<R = StdRng> {
    rng: R,
}

impl SyntheticFeed<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SyntheticFeed<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `length` one-minute bars ending now.
    pub fn generate_series(&mut self, symbol: &str, length: usize) -> Result<PriceSeries, MarketError> {
        self.generate_series_at(symbol, length, Utc::now())
    }

    /// `length` one-minute bars, the newest stamped `end`.
    pub fn generate_series_at(
        &mut self,
        symbol: &str,
        length: usize,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries, MarketError> {
        let step = Normal::new(0.0, CLOSE_STEP_SD)?;
        let open_noise = Normal::new(0.0, OPEN_NOISE_SD)?;
        let wick = Normal::new(0.0, WICK_SD)?;

        let mut close = BASE_PRICE;
        let mut bars = Vec::with_capacity(length);

        for i in 0..length {
            close += step.sample(&mut self.rng);

            let open = close + open_noise.sample(&mut self.rng);
            let high = open.max(close) + wick.sample(&mut self.rng).abs();
            let low = open.min(close) - wick.sample(&mut self.rng).abs();
            let volume = BASE_VOLUME + self.rng.gen_range(0..VOLUME_SPREAD);

            let minutes_back = (length - 1 - i) as i64;

            bars.push(PriceBar {
                ts: end - Duration::minutes(minutes_back),
                open,
                high,
                low,
                close,
                volume,
            });
        }

        Ok(PriceSeries::new(symbol, bars))
    }
}

#[async_trait]
impl<R: Rng + Send> MarketFeed for SyntheticFeed<R> {
    async fn fetch_ohlc(&mut self, symbol: &str, limit: usize) -> Result<PriceSeries, MarketError> {
        let series = self.generate_series(symbol, limit)?;

        debug!(
            symbol = %symbol,
            bars = series.len(),
            last_close = series.last().map(|b| b.close),
            "synthetic series generated"
        );

        Ok(series)
    }
}
