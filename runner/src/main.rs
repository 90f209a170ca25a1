use anyhow::Context;
use clap::Parser;
use common::logger::init_logger;
use market::SyntheticFeed;
use runner::{
    alert::AlertClient,
    config::{AppConfig, Cli},
    driver::SignalEngine,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger("fx-signal-engine", cli.json_logs());

    let cfg = AppConfig::from(cli);

    let alerts = AlertClient::new(&cfg.backend_url, cfg.hmac_secret.clone())
        .context("failed to build webhook client")?;

    // TODO: swap SyntheticFeed for a real market-data MarketFeed implementation.
    let engine = SignalEngine::new(cfg, SyntheticFeed::from_entropy(), alerts);

    tokio::select! {
        _ = engine.run() => {}
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
