//! Signal engine driver
//!
//! Polls the feed on a fixed sleep, runs the crossover computation on the
//! fresh series and posts an alert when a side comes out.
//!
//! Data flow:
//! Feed → compute_signal → AlertClient
//!
//! Every iteration stands alone. A failed iteration is logged and the loop
//! sleeps as usual before trying again.

use common::logger::poll_span;
use engine::{SignalEvent, compute_signal_with};
use market::MarketFeed;
use tracing::{Instrument, error, info};

use crate::alert::{AlertClient, DispatchOutcome};
use crate::config::AppConfig;
use crate::error::AppError;

/// What one successful iteration produced.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub event: SignalEvent,

    /// `None` when there was no signal to send.
    pub dispatch: Option<DispatchOutcome>,
}

pub struct SignalEngine<F> {
    cfg: AppConfig,
    feed: F,
    alerts: AlertClient,
    iteration: u64,
}

impl<F: MarketFeed> SignalEngine<F> {
    pub fn new(cfg: AppConfig, feed: F, alerts: AlertClient) -> Self {
        Self {
            cfg,
            feed,
            alerts,
            iteration: 0,
        }
    }

    /// fetch → compute → log status → dispatch when a side is present.
    pub async fn run_iteration(&mut self) -> Result<IterationReport, AppError> {
        let series = self.feed.fetch_ohlc(&self.cfg.symbol, self.cfg.bars).await?;
        let event = compute_signal_with(&series, &self.cfg.signal)?;

        info!(
            trend = %event.trend,
            signal = event.side.map_or("none", |s| s.as_str()),
            price = %format!("{:.5}", event.price),
            rsi = %event.rsi.map_or_else(|| "nan".to_string(), |r| format!("{r:.2}")),
            "poll complete"
        );

        let dispatch = match (event.side, event.rsi) {
            (Some(side), Some(rsi)) => Some(
                self.alerts
                    .post_alert(&self.cfg.symbol, side, event.price, rsi)
                    .await,
            ),
            _ => None,
        };

        Ok(IterationReport { event, dispatch })
    }

    /// One iteration inside its own span. Errors are logged and swallowed.
    pub async fn poll_once(&mut self) -> Option<IterationReport> {
        self.iteration += 1;
        let span = poll_span(&self.cfg.symbol, self.iteration);

        async {
            match self.run_iteration().await {
                Ok(report) => Some(report),
                Err(e) => {
                    error!(error = %e, "engine error");
                    None
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Poll forever. Only returns if the task is dropped.
    pub async fn run(mut self) {
        info!(
            symbol = %self.cfg.symbol,
            backend = %self.alerts.webhook_url(),
            interval = %self.cfg.interval,
            poll_secs = self.cfg.poll.as_secs(),
            bars = self.cfg.bars,
            signed = self.cfg.hmac_secret.is_some(),
            "signal engine started (synthetic feed, demo only)"
        );

        loop {
            self.poll_once().await;
            tokio::time::sleep(self.cfg.poll).await;
        }
    }
}
