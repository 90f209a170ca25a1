pub mod errors;
pub mod feed;
pub mod synthetic;
pub mod types;

pub use errors::MarketError;
pub use feed::MarketFeed;
pub use synthetic::SyntheticFeed;
pub use types::*;
