//! Demonstration driver for the stock ledger.

pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::run_demo;
