pub mod schema;

use crate::config::{DemoConfig, StoreLocation};
use crate::error::Result;
use crate::models::ClimateObservation;
use crate::writers::ParquetWriter;
use arrow::record_batch::RecordBatch;
use datafusion::datasource::MemTable;
use datafusion::prelude::{DataFrame, ParquetReadOptions, SessionConfig, SessionContext};
use std::sync::Arc;
use tracing::{debug, info};

pub use schema::{batches_to_observations, create_schema, observations_to_batch};

/// The queryable observation table, held by an embedded SQL engine
pub struct ClimateStore {
    ctx: SessionContext,
    table_name: String,
    row_count: usize,
}

impl ClimateStore {
    /// Validate `observations` and register them as the configured table
    pub async fn open(config: &DemoConfig, observations: &[ClimateObservation]) -> Result<Self> {
        for observation in observations {
            observation.check()?;
        }

        let mut session_config =
            SessionConfig::new().with_target_partitions(config.target_partitions);
        // Keep Parquet-backed strings as Utf8 so both backends yield identical batches
        session_config
            .options_mut()
            .execution
            .parquet
            .schema_force_view_types = false;
        let ctx = SessionContext::new_with_config(session_config);

        match config.store_location() {
            StoreLocation::InMemory => {
                let batch = observations_to_batch(observations)?;
                let partitions = if batch.num_rows() == 0 {
                    vec![vec![]]
                } else {
                    vec![vec![batch]]
                };
                let table = MemTable::try_new(create_schema(), partitions)?;
                ctx.register_table(config.table_name.as_str(), Arc::new(table))?;
                debug!("Registered in-memory table '{}'", config.table_name);
            }
            StoreLocation::File(path) => {
                let writer = ParquetWriter::new().with_compression(&config.compression)?;
                writer.write_observations(observations, &path)?;
                let info = writer.get_file_info(&path)?;
                debug!(
                    "Parquet file holds {} rows in {} row groups ({} bytes)",
                    info.total_rows, info.row_groups, info.file_size
                );

                // Listing tables filter by extension; match whatever the file is called
                let extension = path
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default();
                let options = ParquetReadOptions::default().file_extension(&extension);
                ctx.register_parquet(
                    config.table_name.as_str(),
                    path.to_string_lossy().to_string(),
                    options,
                )
                .await?;
                debug!(
                    "Registered Parquet table '{}' at {}",
                    config.table_name,
                    path.display()
                );
            }
        }

        info!(
            "Loaded {} observations into '{}'",
            observations.len(),
            config.table_name
        );

        Ok(Self {
            ctx,
            table_name: config.table_name.clone(),
            row_count: observations.len(),
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Plan a statement without executing it
    pub async fn frame(&self, sql: &str) -> Result<DataFrame> {
        Ok(self.ctx.sql(sql).await?)
    }

    /// Run a statement to completion
    pub async fn query(&self, sql: &str) -> Result<Vec<RecordBatch>> {
        debug!("Executing: {}", sql.trim());
        let batches = self.frame(sql).await?.collect().await?;
        debug!(
            "Query returned {} rows",
            batches.iter().map(|b| b.num_rows()).sum::<usize>()
        );
        Ok(batches)
    }

    /// Every stored observation, in insertion order
    pub async fn select_all(&self) -> Result<Vec<ClimateObservation>> {
        let sql = crate::queries::select_all_sql(&self.table_name);
        let batches = self.query(&sql).await?;
        batches_to_observations(&batches)
    }
}
