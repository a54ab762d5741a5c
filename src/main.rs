use clap::Parser;
use climate_sql_demo::cli::{run, Cli};
use climate_sql_demo::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
