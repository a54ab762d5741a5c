use crate::analyzers::ClimateFrame;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::models::ClimateObservation;
use crate::queries;
use crate::readers::{sample_observations, ObservationReader};
use crate::report::{Report, Section};
use crate::store::ClimateStore;
use crate::utils::constants::*;
use tracing::info;

/// The dataset named by `config`: the CSV file if given, else the built-in sample
pub fn load_observations(config: &DemoConfig) -> Result<Vec<ClimateObservation>> {
    match &config.data_file {
        Some(path) => ObservationReader::new().read_csv(path),
        None => Ok(sample_observations()),
    }
}

/// Run every demo step, in order, against a freshly opened store
pub async fn run_demo(config: &DemoConfig) -> Result<Report> {
    config.validate()?;
    let observations = load_observations(config)?;
    run_demo_with(config, &observations).await
}

pub async fn run_demo_with(
    config: &DemoConfig,
    observations: &[ClimateObservation],
) -> Result<Report> {
    let store = ClimateStore::open(config, observations).await?;
    let mut report = Report::new();

    info!("Step 1/4: aggregation by city");
    let averages = queries::average_by_city(&store, config.average_order).await?;
    report.push(Section::new(TITLE_AVERAGES, averages.batches));

    info!("Step 2/4: window-function ranking");
    let ranks = queries::rank_by_date(&store).await?;
    report.push(Section::new(TITLE_RANKS, ranks.batches));

    info!("Step 3/4: CTE top-per-date");
    let hottest = queries::hottest_per_date(&store).await?;
    report.push(Section::new(TITLE_HOTTEST, hottest.batches));

    info!("Step 4/4: DataFrame correlation");
    let frame = ClimateFrame::load(&store).await?;
    report.push(Section::new(
        TITLE_FULL_TABLE,
        frame.head(config.head_rows).await?,
    ));

    let matrix = frame
        .correlation_matrix(&[COL_TEMPERATURE, COL_HUMIDITY])
        .await?;
    report.push(Section::new(TITLE_CORRELATION, vec![matrix.to_batch()?]));

    info!("Demo complete: {} sections", report.sections().len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_report_section_order() {
        let report = run_demo(&DemoConfig::default()).await.unwrap();
        let titles: Vec<&str> = report.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                TITLE_AVERAGES,
                TITLE_RANKS,
                TITLE_HOTTEST,
                TITLE_FULL_TABLE,
                TITLE_CORRELATION
            ]
        );
    }

    #[tokio::test]
    async fn test_head_rows_setting() {
        let config = DemoConfig {
            head_rows: 2,
            ..DemoConfig::default()
        };
        let report = run_demo(&config).await.unwrap();
        assert_eq!(report.section(TITLE_FULL_TABLE).unwrap().row_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_config_fails_fast() {
        let config = DemoConfig {
            table_name: "bad name".to_string(),
            ..DemoConfig::default()
        };
        assert!(run_demo(&config).await.is_err());
    }
}
