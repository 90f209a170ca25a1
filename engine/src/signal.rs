//! EMA crossover signal
//!
//! The decision only ever looks at the last two rows of a freshly built
//! frame. Nothing is carried from one poll to the next, so "previous bar"
//! means the second-to-last bar of the current series.

use std::fmt;

use market::PriceSeries;
use serde::Serialize;
use tracing::debug;

use crate::errors::SignalError;
use crate::frame::{IndicatorFrame, IndicatorRow};

/// Bars needed to compare a previous and a latest row.
pub const MIN_BARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalReason {
    EmaCrossUp,
    EmaCrossDown,
}

impl SignalReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalReason::EmaCrossUp => "ema_cross_up",
            SignalReason::EmaCrossDown => "ema_cross_down",
        }
    }
}

impl fmt::Display for SignalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bull,
    Bear,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Bull => "bull",
            Trend::Bear => "bear",
        })
    }
}

/// Indicator windows and RSI guards.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalParams {
    pub fast: usize,
    pub slow: usize,
    pub rsi_window: usize,

    /// Buys are suppressed at or above this RSI.
    pub overbought: f64,

    /// Sells are suppressed at or below this RSI.
    pub oversold: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            fast: 8,
            slow: 50,
            rsi_window: 14,
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

/// Outcome of one signal computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalEvent {
    pub side: Option<Side>,
    pub reason: Option<SignalReason>,
    pub price: f64,
    pub rsi: Option<f64>,
    pub trend: Trend,
}

pub fn compute_signal(series: &PriceSeries) -> Result<SignalEvent, SignalError> {
    compute_signal_with(series, &SignalParams::default())
}

pub fn compute_signal_with(
    series: &PriceSeries,
    params: &SignalParams,
) -> Result<SignalEvent, SignalError> {
    let frame = IndicatorFrame::build(series, params);

    let Some((prev, last)) = frame.last_two() else {
        return Err(SignalError::InsufficientData {
            required: MIN_BARS,
            actual: series.len(),
        });
    };

    debug!(
        prev_fast = prev.ema_fast,
        prev_slow = prev.ema_slow,
        last_fast = last.ema_fast,
        last_slow = last.ema_slow,
        rsi = last.rsi,
        "indicator frame tail"
    );

    let trend = if holds(last.ema_fast, last.ema_slow, |f, s| f > s) {
        Trend::Bull
    } else {
        Trend::Bear
    };

    let crossover = classify(prev, last, params);

    Ok(SignalEvent {
        side: crossover.map(|(side, _)| side),
        reason: crossover.map(|(_, reason)| reason),
        price: last.bar.close,
        rsi: last.rsi,
        trend,
    })
}

/// Crossover rules on two consecutive rows.
///
/// A missing reading makes every comparison it takes part in false, so warm-up
/// rows never produce a signal.
pub fn classify(
    prev: &IndicatorRow,
    last: &IndicatorRow,
    params: &SignalParams,
) -> Option<(Side, SignalReason)> {
    let crossed_up = holds(prev.ema_fast, prev.ema_slow, |f, s| f <= s)
        && holds(last.ema_fast, last.ema_slow, |f, s| f > s);
    let crossed_down = holds(prev.ema_fast, prev.ema_slow, |f, s| f >= s)
        && holds(last.ema_fast, last.ema_slow, |f, s| f < s);

    if crossed_up && last.rsi.is_some_and(|r| r < params.overbought) {
        Some((Side::Buy, SignalReason::EmaCrossUp))
    } else if crossed_down && last.rsi.is_some_and(|r| r > params.oversold) {
        Some((Side::Sell, SignalReason::EmaCrossDown))
    } else {
        None
    }
}

fn holds(a: Option<f64>, b: Option<f64>, op: impl Fn(f64, f64) -> bool) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => op(a, b),
        _ => false,
    }
}
