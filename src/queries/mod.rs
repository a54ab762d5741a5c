use crate::config::AverageOrder;
use crate::error::Result;
use crate::models::{CityAverage, DailyRank};
use crate::store::ClimateStore;
use arrow::record_batch::RecordBatch;

/// Per-city mean temperature and humidity
pub fn average_by_city_sql(table: &str, order: AverageOrder) -> String {
    let order_by = match order {
        AverageOrder::Temperature => "avg_temp DESC, city ASC",
        AverageOrder::City => "city ASC",
    };

    format!(
        "SELECT
            city,
            AVG(temperature) AS avg_temp,
            AVG(humidity) AS avg_humidity
        FROM {table}
        GROUP BY city
        ORDER BY {order_by}"
    )
}

/// Competition rank (`RANK()`) of every reading within its date, hottest first
pub fn rank_by_date_sql(table: &str) -> String {
    format!(
        "SELECT
            city,
            reading_date,
            temperature,
            RANK() OVER (
                PARTITION BY reading_date
                ORDER BY temperature DESC
            ) AS temp_rank
        FROM {table}
        ORDER BY reading_date, temp_rank, city"
    )
}

/// Readings equal to their date's maximum, via a CTE over the ranking
pub fn hottest_per_date_sql(table: &str) -> String {
    format!(
        "WITH ranked_temps AS (
            SELECT
                city,
                reading_date,
                temperature,
                RANK() OVER (
                    PARTITION BY reading_date
                    ORDER BY temperature DESC
                ) AS temp_rank
            FROM {table}
        )
        SELECT *
        FROM ranked_temps
        WHERE temp_rank = 1
        ORDER BY reading_date, city"
    )
}

pub fn select_all_sql(table: &str) -> String {
    format!("SELECT * FROM {table} ORDER BY id")
}

/// Raw batches for display alongside the decoded rows
#[derive(Debug, Clone)]
pub struct QueryOutput<T> {
    pub batches: Vec<RecordBatch>,
    pub rows: Vec<T>,
}

pub async fn average_by_city(
    store: &ClimateStore,
    order: AverageOrder,
) -> Result<QueryOutput<CityAverage>> {
    let batches = store
        .query(&average_by_city_sql(store.table_name(), order))
        .await?;
    let rows = CityAverage::from_batches(&batches)?;
    Ok(QueryOutput { batches, rows })
}

pub async fn rank_by_date(store: &ClimateStore) -> Result<QueryOutput<DailyRank>> {
    let batches = store.query(&rank_by_date_sql(store.table_name())).await?;
    let rows = DailyRank::from_batches(&batches)?;
    Ok(QueryOutput { batches, rows })
}

pub async fn hottest_per_date(store: &ClimateStore) -> Result<QueryOutput<DailyRank>> {
    let batches = store
        .query(&hottest_per_date_sql(store.table_name()))
        .await?;
    let rows = DailyRank::from_batches(&batches)?;
    Ok(QueryOutput { batches, rows })
}
