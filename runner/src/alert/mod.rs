pub mod client;
pub mod errors;
pub mod payload;
pub mod signing;

pub use client::{AlertClient, AlertReceipt, DispatchOutcome};
pub use errors::AlertError;
pub use payload::AlertPayload;
