use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SignalError {
    #[error("insufficient data: need at least {required} bars, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}
