use crate::cli::args::Cli;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::pipeline::run_demo;
use crate::utils::init_logging;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = cli.apply_overrides(DemoConfig::load(cli.config.as_deref())?);
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    if let Some(path) = &config.database {
        info!("Using Parquet-backed store at {}", path.display());
    }

    let report = run_demo(&config).await?;
    print!("{}", report.render(config.format)?);

    Ok(())
}
