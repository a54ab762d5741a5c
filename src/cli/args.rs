use crate::config::{AverageOrder, DemoConfig, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Every flag is optional; a bare invocation runs the built-in demo in memory.
#[derive(Parser, Debug)]
#[command(name = "climate-sql-demo")]
#[command(about = "SQL analytics demo over a small climate dataset")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Configuration file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Back the table with a Parquet file at this path")]
    pub database: Option<PathBuf>,

    #[arg(long, help = "CSV file replacing the built-in dataset")]
    pub data: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Rows shown from the full table")]
    pub head_rows: Option<usize>,

    #[arg(long, value_enum, help = "Row order of the per-city averages")]
    pub order_averages: Option<AverageOrder>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line win over the configuration file
    pub fn apply_overrides(&self, mut config: DemoConfig) -> DemoConfig {
        if let Some(path) = &self.database {
            config.database = Some(path.clone());
        }
        if let Some(path) = &self.data {
            config.data_file = Some(path.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(rows) = self.head_rows {
            config.head_rows = rows;
        }
        if let Some(order) = self.order_averages {
            config.average_order = order;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["climate-sql-demo"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.apply_overrides(DemoConfig::default()), DemoConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "climate-sql-demo",
            "--format",
            "json",
            "--head-rows",
            "3",
            "--order-averages",
            "city",
            "--database",
            "out/climate.parquet",
        ])
        .unwrap();

        let config = cli.apply_overrides(DemoConfig::default());
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.head_rows, 3);
        assert_eq!(config.average_order, AverageOrder::City);
        assert_eq!(config.database, Some(PathBuf::from("out/climate.parquet")));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["climate-sql-demo", "--format", "xml"]).is_err());
    }
}
