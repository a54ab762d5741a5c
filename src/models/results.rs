use crate::error::{DemoError, Result};
use crate::utils::columns::{column_as, downcast, ensure_no_nulls};
use crate::utils::constants::*;
use crate::utils::days_to_date;
use arrow::array::{Date32Array, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the per-city aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityAverage {
    pub city: String,
    pub avg_temp: f64,
    pub avg_humidity: f64,
}

/// One row of the per-date temperature ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRank {
    pub city: String,
    pub reading_date: NaiveDate,
    pub temperature: f64,
    pub temp_rank: u64,
}

impl CityAverage {
    pub fn from_batches(batches: &[RecordBatch]) -> Result<Vec<Self>> {
        let mut rows = Vec::new();

        for batch in batches {
            let cities = column_as(batch, COL_CITY, &DataType::Utf8)?;
            let temps = column_as(batch, COL_AVG_TEMP, &DataType::Float64)?;
            let humidity = column_as(batch, COL_AVG_HUMIDITY, &DataType::Float64)?;
            ensure_no_nulls(&cities, COL_CITY)?;
            ensure_no_nulls(&temps, COL_AVG_TEMP)?;
            ensure_no_nulls(&humidity, COL_AVG_HUMIDITY)?;

            let cities = downcast::<StringArray>(&cities, COL_CITY)?;
            let temps = downcast::<Float64Array>(&temps, COL_AVG_TEMP)?;
            let humidity = downcast::<Float64Array>(&humidity, COL_AVG_HUMIDITY)?;

            for i in 0..batch.num_rows() {
                rows.push(Self {
                    city: cities.value(i).to_string(),
                    avg_temp: temps.value(i),
                    avg_humidity: humidity.value(i),
                });
            }
        }

        Ok(rows)
    }
}

impl DailyRank {
    pub fn from_batches(batches: &[RecordBatch]) -> Result<Vec<Self>> {
        let mut rows = Vec::new();

        for batch in batches {
            let cities = column_as(batch, COL_CITY, &DataType::Utf8)?;
            let dates = column_as(batch, COL_READING_DATE, &DataType::Date32)?;
            let temps = column_as(batch, COL_TEMPERATURE, &DataType::Float64)?;
            let ranks = column_as(batch, COL_TEMP_RANK, &DataType::UInt64)?;
            for (array, name) in [
                (&cities, COL_CITY),
                (&dates, COL_READING_DATE),
                (&temps, COL_TEMPERATURE),
                (&ranks, COL_TEMP_RANK),
            ] {
                ensure_no_nulls(array, name)?;
            }

            let cities = downcast::<StringArray>(&cities, COL_CITY)?;
            let dates = downcast::<Date32Array>(&dates, COL_READING_DATE)?;
            let temps = downcast::<Float64Array>(&temps, COL_TEMPERATURE)?;
            let ranks = downcast::<UInt64Array>(&ranks, COL_TEMP_RANK)?;

            for i in 0..batch.num_rows() {
                let temp_rank = ranks.value(i);
                if temp_rank == 0 {
                    return Err(DemoError::InvalidFormat(
                        "Rank values start at 1".to_string(),
                    ));
                }

                rows.push(Self {
                    city: cities.value(i).to_string(),
                    reading_date: days_to_date(dates.value(i))?,
                    temperature: temps.value(i),
                    temp_rank,
                });
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, StringViewArray};
    use arrow::datatypes::{Field, Schema};
    use std::sync::Arc;

    #[test]
    fn test_decode_city_averages() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_CITY, DataType::Utf8View, false),
            Field::new(COL_AVG_TEMP, DataType::Float64, true),
            Field::new(COL_AVG_HUMIDITY, DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringViewArray::from(vec!["Houston", "Chicago"])),
                Arc::new(Float64Array::from(vec![12.5, -5.0])),
                Arc::new(Float64Array::from(vec![67.0, 51.0])),
            ],
        )
        .unwrap();

        let rows = CityAverage::from_batches(&[batch]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "Houston");
        assert_eq!(rows[1].avg_humidity, 51.0);
    }

    #[test]
    fn test_decode_daily_ranks_widens_rank() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_CITY, DataType::Utf8, false),
            Field::new(COL_READING_DATE, DataType::Date32, false),
            Field::new(COL_TEMPERATURE, DataType::Float64, false),
            Field::new(COL_TEMP_RANK, DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["San Diego"])),
                Arc::new(Date32Array::from(vec![20089])),
                Arc::new(Float64Array::from(vec![15.2])),
                Arc::new(Int64Array::from(vec![1])),
            ],
        )
        .unwrap();

        let rows = DailyRank::from_batches(&[batch]).unwrap();
        assert_eq!(rows[0].reading_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(rows[0].temp_rank, 1);
    }

    #[test]
    fn test_decode_rejects_null_averages() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_CITY, DataType::Utf8, false),
            Field::new(COL_AVG_TEMP, DataType::Float64, true),
            Field::new(COL_AVG_HUMIDITY, DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["Houston"])),
                Arc::new(Float64Array::from(vec![None])),
                Arc::new(Float64Array::from(vec![Some(67.0)])),
            ],
        )
        .unwrap();

        assert!(CityAverage::from_batches(&[batch]).is_err());
    }
}
