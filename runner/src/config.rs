use std::time::Duration;

use clap::Parser;
use engine::SignalParams;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

#[derive(Debug, Parser)]
#[clap(name = "fx-signal-engine", version)]
pub struct Cli {
    /// Base URL of the alert receiver; alerts go to `<backend>/webhook`
    #[clap(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend: String,

    /// Instrument to poll
    #[clap(long, default_value = "GBPUSD")]
    pub symbol: String,

    /// Bar interval label. Informational only, does not change the cadence
    #[clap(long, default_value = "1m")]
    pub interval: String,

    /// Seconds to sleep between polls
    #[clap(long, default_value_t = 60, allow_negative_numbers = true)]
    pub poll: i64,

    /// Bars requested from the feed on every poll
    #[clap(long, default_value_t = 200)]
    pub bars: usize,

    /// Shared secret for the `x-signature` HMAC header
    #[clap(long, env = "HMAC_SECRET", hide_env_values = true)]
    pub hmac_secret: Option<String>,

    /// One JSON object per log line (always on when APP_ENV=production)
    #[clap(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn json_logs(&self) -> bool {
        self.log_json || std::env::var("APP_ENV").unwrap_or_default() == "production"
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Alert receiver base URL, without the `/webhook` path.
    pub backend_url: String,

    pub symbol: String,

    /// Carried into logs only.
    pub interval: String,

    /// Sleep between polls. Negative `--poll` values clamp to zero.
    pub poll: Duration,

    /// Series length per poll.
    pub bars: usize,

    pub hmac_secret: Option<String>,

    pub signal: SignalParams,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            backend_url: cli.backend,
            symbol: cli.symbol,
            interval: cli.interval,
            poll: Duration::from_secs(cli.poll.max(0) as u64),
            bars: cli.bars,
            hmac_secret: cli.hmac_secret,
            signal: SignalParams::default(),
        }
    }
}
