mod init;
mod span;

pub use init::init_logger;
pub use span::{poll_span, warn_if_slow};
