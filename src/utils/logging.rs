use crate::error::{DemoError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

/// Filter directive for the chosen verbosity. Built from flags only; the
/// process environment is never consulted.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,climate_sql_demo=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Logs go to stderr unless a log file is
/// given, so stdout carries only the report.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::new(filter_directive(verbose));
    let builder = fmt().with_env_filter(filter).with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| DemoError::Config(format!("Failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false), "warn");
        assert!(filter_directive(true).contains("climate_sql_demo=debug"));
    }

    #[test]
    fn test_log_file_receives_events() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demo.log");

        init_logging(true, Some(&path)).unwrap();
        tracing::debug!("store opened");

        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("store opened"));
        assert!(!contents.contains("\u{1b}["));
    }
}
