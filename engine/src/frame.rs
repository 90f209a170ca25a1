use market::{PriceBar, PriceSeries};

use crate::indicators::{ema, rsi};
use crate::signal::SignalParams;

/// A bar plus the indicator readings at that bar.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub bar: PriceBar,
    pub ema_fast: Option<f64>,
    pub ema_slow: Option<f64>,
    pub rsi: Option<f64>,
}

/// Price series augmented with fast/slow EMA and RSI columns.
///
/// Same length and ordering as the source series. Built, read and dropped
/// within one poll.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    pub fn build(series: &PriceSeries, params: &SignalParams) -> Self {
        let closes = series.closes();
        let fast = ema(&closes, params.fast);
        let slow = ema(&closes, params.slow);
        let osc = rsi(&closes, params.rsi_window);

        let rows = series
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                bar: bar.clone(),
                ema_fast: fast[i],
                ema_slow: slow[i],
                rsi: osc[i],
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Second-to-last and last rows.
    pub fn last_two(&self) -> Option<(&IndicatorRow, &IndicatorRow)> {
        match self.rows.as_slice() {
            [.., prev, last] => Some((prev, last)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn frame_mirrors_series_and_warms_up() {
        let closes: Vec<f64> = (0..60).map(|i| 1.2 + i as f64 * 1e-4).collect();
        let series = PriceSeries::from_closes("GBPUSD", &closes, Utc::now());
        let frame = IndicatorFrame::build(&series, &SignalParams::default());

        assert_eq!(frame.len(), series.len());
        assert_eq!(frame.rows()[10].bar, series.bars[10]);

        // fast 8, slow 50, rsi 14
        assert!(frame.rows()[6].ema_fast.is_none());
        assert!(frame.rows()[7].ema_fast.is_some());
        assert!(frame.rows()[48].ema_slow.is_none());
        assert!(frame.rows()[49].ema_slow.is_some());
        assert!(frame.rows()[13].rsi.is_none());
        assert!(frame.rows()[14].rsi.is_some());
    }

    #[test]
    fn last_two_needs_two_rows() {
        let params = SignalParams::default();
        let now = Utc::now();

        let one = IndicatorFrame::build(&PriceSeries::from_closes("X", &[1.0], now), &params);
        assert!(one.last_two().is_none());

        let three =
            IndicatorFrame::build(&PriceSeries::from_closes("X", &[1.0, 2.0, 3.0], now), &params);
        let (prev, last) = three.last_two().unwrap();
        assert_eq!(prev.bar.close, 2.0);
        assert_eq!(last.bar.close, 3.0);
    }
}
