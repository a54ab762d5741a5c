use crate::error::{DemoError, Result};
use crate::utils::constants::{
    DEFAULT_COMPRESSION, DEFAULT_HEAD_ROWS, DEFAULT_TABLE_NAME, DEFAULT_TARGET_PARTITIONS,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Row order of the per-city aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AverageOrder {
    /// Warmest city first, ties by city name
    #[default]
    Temperature,
    /// Alphabetical by city name
    City,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Where the table data lives while the demo runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    InMemory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub table_name: String,
    /// Parquet file backing the table; in-memory when absent
    pub database: Option<PathBuf>,
    /// CSV file replacing the built-in dataset
    pub data_file: Option<PathBuf>,
    /// Parquet compression codec for a file-backed store
    pub compression: String,
    pub head_rows: usize,
    pub average_order: AverageOrder,
    pub format: OutputFormat,
    pub target_partitions: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            database: None,
            data_file: None,
            compression: DEFAULT_COMPRESSION.to_string(),
            head_rows: DEFAULT_HEAD_ROWS,
            average_order: AverageOrder::default(),
            format: OutputFormat::default(),
            target_partitions: DEFAULT_TARGET_PARTITIONS,
        }
    }
}

impl DemoConfig {
    /// Load from an optional configuration file; missing keys keep their defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn store_location(&self) -> StoreLocation {
        match &self.database {
            Some(path) => StoreLocation::File(path.clone()),
            None => StoreLocation::InMemory,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_plain_identifier(&self.table_name) {
            return Err(DemoError::Config(format!(
                "Table name must be a lowercase SQL identifier, got: '{}'",
                self.table_name
            )));
        }

        if self.target_partitions == 0 {
            return Err(DemoError::Config(
                "target_partitions must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// `[a-z_][a-z0-9_]*`, which the SQL engine resolves without quoting
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
