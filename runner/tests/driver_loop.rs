use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_test::traced_test;

use engine::{Side, SignalParams, Trend};
use market::{MarketError, MarketFeed, PriceSeries, SyntheticFeed};
use runner::alert::{AlertClient, DispatchOutcome};
use runner::config::AppConfig;
use runner::driver::SignalEngine;

/// Always returns the same closes.
struct ScriptedFeed {
    closes: Vec<f64>,
}

#[async_trait]
impl MarketFeed for ScriptedFeed {
    async fn fetch_ohlc(&mut self, symbol: &str, _limit: usize) -> Result<PriceSeries, MarketError> {
        Ok(PriceSeries::from_closes(symbol, &self.closes, Utc::now()))
    }
}

/// Fails every call and counts them.
struct DownFeed {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl MarketFeed for DownFeed {
    async fn fetch_ohlc(&mut self, symbol: &str, _limit: usize) -> Result<PriceSeries, MarketError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MarketError::Unavailable {
            symbol: symbol.to_string(),
            reason: "maintenance".into(),
        })
    }
}

fn config(backend_url: &str) -> AppConfig {
    AppConfig {
        backend_url: backend_url.to_string(),
        symbol: "GBPUSD".into(),
        interval: "1m".into(),
        poll: Duration::from_millis(5),
        bars: 200,
        hmac_secret: None,
        signal: SignalParams::default(),
    }
}

/// Choppy decline followed by a reversal that crosses the averages with
/// RSI just under 67.
fn crossing_up_closes() -> Vec<f64> {
    let mut closes = vec![1.30];
    for i in 0..99 {
        let step = if i % 2 == 0 { -10.0 } else { 9.0 };
        let last = *closes.last().unwrap();
        closes.push(last + step * 0.0001);
    }
    let last = *closes.last().unwrap();
    closes.push(last + 80.0 * 0.0001);
    closes
}

fn steady_rise() -> Vec<f64> {
    (0..200).map(|i| 1.2 + i as f64 * 0.0001).collect()
}

fn build_engine<F: MarketFeed>(backend_url: &str, feed: F) -> SignalEngine<F> {
    let alerts = AlertClient::new(backend_url, None).unwrap();
    SignalEngine::new(config(backend_url), feed, alerts)
}

#[tokio::test]
async fn crossover_posts_exactly_one_alert() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .with_status(200)
        .with_body("ok")
        .expect(1)
        .create_async()
        .await;

    let feed = ScriptedFeed {
        closes: crossing_up_closes(),
    };
    let mut engine = build_engine(&server.url(), feed);

    let report = engine.run_iteration().await.unwrap();

    mock.assert_async().await;
    assert_eq!(report.event.side, Some(Side::Buy));
    assert_eq!(report.event.trend, Trend::Bull);
    assert!(matches!(
        report.dispatch,
        Some(DispatchOutcome::Delivered(ref r)) if r.status == 200
    ));
}

#[tokio::test]
async fn no_signal_posts_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .expect(0)
        .create_async()
        .await;

    let feed = ScriptedFeed {
        closes: steady_rise(),
    };
    let mut engine = build_engine(&server.url(), feed);

    let report = engine.run_iteration().await.unwrap();

    mock.assert_async().await;
    assert_eq!(report.event.side, None);
    assert_eq!(report.event.trend, Trend::Bull);
    assert!(report.dispatch.is_none());
}

#[tokio::test]
#[traced_test]
async fn single_bar_series_is_reported_and_swallowed() {
    let feed = ScriptedFeed { closes: vec![1.2] };
    let mut engine = build_engine("http://127.0.0.1:1", feed);

    assert!(engine.run_iteration().await.is_err());
    assert!(engine.poll_once().await.is_none());
    assert!(logs_contain("engine error"));
    assert!(logs_contain("insufficient data"));
}

#[tokio::test]
#[traced_test]
async fn feed_failure_is_swallowed() {
    let calls = Arc::new(AtomicUsize::new(0));
    let feed = DownFeed {
        calls: Arc::clone(&calls),
    };
    let mut engine = build_engine("http://127.0.0.1:1", feed);

    assert!(engine.poll_once().await.is_none());
    assert!(engine.poll_once().await.is_none());

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(logs_contain("maintenance"));
}

#[tokio::test]
#[traced_test]
async fn unreachable_backend_does_not_stop_the_poll() {
    let feed = ScriptedFeed {
        closes: crossing_up_closes(),
    };
    let mut engine = build_engine("http://127.0.0.1:1", feed);

    for _ in 0..2 {
        let report = engine.poll_once().await.expect("iteration should complete");
        assert!(matches!(
            report.dispatch,
            Some(DispatchOutcome::Failed { .. })
        ));
    }
    assert!(logs_contain("error posting alert"));
}

#[tokio::test]
async fn synthetic_feed_runs_end_to_end() {
    let feed = SyntheticFeed::new(StdRng::seed_from_u64(17));
    // signals, if any, go nowhere; the iteration must still complete
    let mut engine = build_engine("http://127.0.0.1:1", feed);

    for _ in 0..5 {
        let report = engine.poll_once().await.expect("iteration should complete");
        assert!(matches!(report.event.trend, Trend::Bull | Trend::Bear));
        assert_eq!(report.dispatch.is_some(), report.event.side.is_some());
    }
}

#[tokio::test]
async fn run_keeps_polling_through_errors() {
    let calls = Arc::new(AtomicUsize::new(0));
    let feed = DownFeed {
        calls: Arc::clone(&calls),
    };
    let engine = build_engine("http://127.0.0.1:1", feed);

    let res = tokio::time::timeout(Duration::from_millis(200), engine.run()).await;

    // run never finishes on its own
    assert!(res.is_err());
    assert!(calls.load(Ordering::SeqCst) >= 2);
}
