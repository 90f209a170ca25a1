use chrono::{DateTime, Utc};

/// One simulated minute of trading.
///
/// `high >= max(open, close)` and `low <= min(open, close)` hold for bars
/// built by the synthetic feed. Nothing else checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub ts: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Ordered bars for a single symbol, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// Build a series from close prices alone, one bar per minute ending at
    /// `end`. Open/high/low collapse onto the close.
    pub fn from_closes(symbol: impl Into<String>, closes: &[f64], end: DateTime<Utc>) -> Self {
        let n = closes.len() as i64;
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                ts: end - chrono::Duration::minutes(n - 1 - i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 0,
            })
            .collect();

        Self::new(symbol, bars)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}
