pub mod alert;
pub mod config;
pub mod driver;
pub mod error;
