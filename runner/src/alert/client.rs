use std::time::Duration;

use chrono::Utc;
use common::logger::warn_if_slow;
use engine::Side;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument, warn};

use super::errors::AlertError;
use super::payload::AlertPayload;
use super::signing::{SIGNATURE_HEADER, sign_body};

pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);
const SLOW_DISPATCH: Duration = Duration::from_secs(2);

/// What the receiver answered.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertReceipt {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The receiver answered, whatever the status.
    Delivered(AlertReceipt),

    /// Transport failure. The alert is dropped.
    Failed { error: String },
}

#[derive(Clone)]
pub struct AlertClient {
    http: Client,
    webhook_url: String,
    hmac_secret: Option<String>,
}

impl AlertClient {
    pub fn new(backend_url: &str, hmac_secret: Option<String>) -> Result<Self, AlertError> {
        let http = Client::builder().timeout(WEBHOOK_TIMEOUT).build()?;

        Ok(Self {
            http,
            webhook_url: format!("{}/webhook", backend_url.trim_end_matches('/')),
            hmac_secret,
        })
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// One POST of `payload`. No retry.
    #[instrument(
        skip(self, payload),
        fields(url = %self.webhook_url, side = %payload.side),
        level = "debug"
    )]
    pub async fn send(&self, payload: &AlertPayload) -> Result<AlertReceipt, AlertError> {
        let body = serde_json::to_vec(payload)?;

        let mut req = self
            .http
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(secret) = &self.hmac_secret {
            req = req.header(SIGNATURE_HEADER, sign_body(secret, &body)?);
        }

        let resp = req.body(body).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        debug!(status = status.as_u16(), "webhook answered");

        Ok(AlertReceipt { status, body })
    }

    /// Build the alert for `side` and post it.
    ///
    /// Errors end here: they are logged and reported as
    /// [`DispatchOutcome::Failed`], never returned.
    pub async fn post_alert(&self, symbol: &str, side: Side, price: f64, rsi: f64) -> DispatchOutcome {
        let payload = AlertPayload::new(symbol, side, price, rsi, Utc::now());

        match warn_if_slow("alert dispatch", SLOW_DISPATCH, self.send(&payload)).await {
            Ok(receipt) => {
                if receipt.status.is_success() {
                    info!(
                        status = receipt.status.as_u16(),
                        body = %receipt.body,
                        "posted alert"
                    );
                } else {
                    warn!(
                        status = receipt.status.as_u16(),
                        body = %receipt.body,
                        "posted alert, receiver returned non-success status"
                    );
                }
                DispatchOutcome::Delivered(receipt)
            }
            Err(e) => {
                error!(error = %e, url = %self.webhook_url, "error posting alert");
                DispatchOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
