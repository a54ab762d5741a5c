pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod queries;
pub mod readers;
pub mod report;
pub mod store;
pub mod utils;
pub mod writers;

pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use pipeline::run_demo;
