use chrono::{DateTime, SecondsFormat, Utc};
use engine::Side;
use serde::Serialize;

pub const SYMBOL_PREFIX: &str = "FX:";
pub const ORDER_SIZE: f64 = 0.01;
pub const ENGINE_TAG: &str = "python_v1";

/// Body of `POST <backend>/webhook`.
///
/// Field order and names are part of the wire contract with the receiver.
/// Stop-loss and take-profit are always sent as explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertPayload {
    pub symbol: String,
    pub side: Side,
    pub price: f64,
    pub size: f64,
    pub sl: Option<f64>,
    pub tp: Option<f64>,
    pub engine: String,
    pub rsi: f64,
    pub time: String,
}

impl AlertPayload {
    pub fn new(symbol: &str, side: Side, price: f64, rsi: f64, now: DateTime<Utc>) -> Self {
        Self {
            symbol: format!("{SYMBOL_PREFIX}{symbol}"),
            side,
            price,
            size: ORDER_SIZE,
            sl: None,
            tp: None,
            engine: ENGINE_TAG.to_string(),
            rsi,
            time: now.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
