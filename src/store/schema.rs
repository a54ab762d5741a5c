use crate::error::{DemoError, Result};
use crate::models::ClimateObservation;
use crate::utils::columns::{column_as, downcast, ensure_no_nulls};
use crate::utils::constants::*;
use crate::utils::{date_to_days, days_to_date};
use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Arrow schema of the observation table
pub fn create_schema() -> SchemaRef {
    let fields = vec![
        Field::new(COL_ID, DataType::Int64, false),
        Field::new(COL_CITY, DataType::Utf8, false),
        Field::new(COL_READING_DATE, DataType::Date32, false),
        Field::new(COL_TEMPERATURE, DataType::Float64, false),
        Field::new(COL_HUMIDITY, DataType::Float64, false),
    ];

    Arc::new(Schema::new(fields))
}

/// Convert observations to a single batch, assigning ids 1..=N in order
pub fn observations_to_batch(observations: &[ClimateObservation]) -> Result<RecordBatch> {
    let count = i64::try_from(observations.len())
        .map_err(|_| DemoError::InvalidFormat("Too many observations".to_string()))?;

    let ids: Vec<i64> = (1..=count).collect();
    let cities: Vec<&str> = observations.iter().map(|o| o.city.as_str()).collect();
    let dates: Vec<i32> = observations
        .iter()
        .map(|o| date_to_days(o.reading_date))
        .collect();
    let temperatures: Vec<f64> = observations.iter().map(|o| o.temperature).collect();
    let humidity: Vec<f64> = observations.iter().map(|o| o.humidity).collect();

    let batch = RecordBatch::try_new(
        create_schema(),
        vec![
            Arc::new(Int64Array::from(ids)),
            Arc::new(StringArray::from(cities)),
            Arc::new(Date32Array::from(dates)),
            Arc::new(Float64Array::from(temperatures)),
            Arc::new(Float64Array::from(humidity)),
        ],
    )?;

    Ok(batch)
}

/// Decode full-table batches back into observations (ids are dropped)
pub fn batches_to_observations(batches: &[RecordBatch]) -> Result<Vec<ClimateObservation>> {
    let mut observations = Vec::new();

    for batch in batches {
        let cities = column_as(batch, COL_CITY, &DataType::Utf8)?;
        let dates = column_as(batch, COL_READING_DATE, &DataType::Date32)?;
        let temps = column_as(batch, COL_TEMPERATURE, &DataType::Float64)?;
        let humidity = column_as(batch, COL_HUMIDITY, &DataType::Float64)?;
        for (array, name) in [
            (&cities, COL_CITY),
            (&dates, COL_READING_DATE),
            (&temps, COL_TEMPERATURE),
            (&humidity, COL_HUMIDITY),
        ] {
            ensure_no_nulls(array, name)?;
        }

        let cities = downcast::<StringArray>(&cities, COL_CITY)?;
        let dates = downcast::<Date32Array>(&dates, COL_READING_DATE)?;
        let temps = downcast::<Float64Array>(&temps, COL_TEMPERATURE)?;
        let humidity = downcast::<Float64Array>(&humidity, COL_HUMIDITY)?;

        for i in 0..batch.num_rows() {
            observations.push(ClimateObservation::new(
                cities.value(i),
                days_to_date(dates.value(i))?,
                temps.value(i),
                humidity.value(i),
            ));
        }
    }

    Ok(observations)
}
