use crate::error::{DemoError, Result};
use crate::store::ClimateStore;
use crate::utils::columns::{column_as, downcast, ensure_no_nulls};
use crate::utils::constants::COL_ID;
use arrow::array::{Array, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use datafusion::functions_aggregate::expr_fn::{corr, count, stddev};
use datafusion::prelude::{col, DataFrame};
use std::sync::Arc;
use tracing::debug;

const CORR_ALIAS: &str = "r";
const COUNT_ALIAS: &str = "n";
const STDDEV_A_ALIAS: &str = "sd_a";
const STDDEV_B_ALIAS: &str = "sd_b";
const MATRIX_LABEL_COLUMN: &str = "variable";

/// The whole observation table as a DataFrame, ordered by id
pub struct ClimateFrame {
    df: DataFrame,
}

impl ClimateFrame {
    pub async fn load(store: &ClimateStore) -> Result<Self> {
        let df = store
            .context()
            .table(store.table_name())
            .await?
            .sort(vec![col(COL_ID).sort(true, false)])?;
        Ok(Self { df })
    }

    /// The first `n` rows
    pub async fn head(&self, n: usize) -> Result<Vec<RecordBatch>> {
        Ok(self.df.clone().limit(0, Some(n))?.collect().await?)
    }

    pub async fn row_count(&self) -> Result<usize> {
        Ok(self.df.clone().count().await?)
    }

    /// One numeric column, widened to f64
    pub async fn column_values(&self, name: &str) -> Result<Vec<f64>> {
        let batches = self.df.clone().select_columns(&[name])?.collect().await?;

        let mut values = Vec::new();
        for batch in &batches {
            let column = column_as(batch, name, &DataType::Float64)?;
            ensure_no_nulls(&column, name)?;
            values.extend(downcast::<Float64Array>(&column, name)?.values().iter().copied());
        }
        Ok(values)
    }

    /// Pearson correlation of two columns via the engine's `corr` aggregate.
    /// NaN when undefined: fewer than two rows, or either column constant.
    pub async fn correlation(&self, a: &str, b: &str) -> Result<f64> {
        let batches = self
            .df
            .clone()
            .aggregate(
                vec![],
                vec![
                    corr(col(a), col(b)).alias(CORR_ALIAS),
                    count(col(a)).alias(COUNT_ALIAS),
                    stddev(col(a)).alias(STDDEV_A_ALIAS),
                    stddev(col(b)).alias(STDDEV_B_ALIAS),
                ],
            )?
            .collect()
            .await?;
        let batch = first_row_batch(&batches)?;

        let defined = scalar_f64(batch, COUNT_ALIAS)?.is_some_and(|n| n >= 2.0)
            && varies(scalar_f64(batch, STDDEV_A_ALIAS)?)
            && varies(scalar_f64(batch, STDDEV_B_ALIAS)?);

        let r = match scalar_f64(batch, CORR_ALIAS)? {
            Some(r) if defined => r,
            _ => f64::NAN,
        };
        debug!("corr({}, {}) = {}", a, b, r);
        Ok(r)
    }

    /// Whether a column has at least two rows and non-zero spread
    pub async fn column_varies(&self, name: &str) -> Result<bool> {
        let batches = self
            .df
            .clone()
            .aggregate(
                vec![],
                vec![
                    count(col(name)).alias(COUNT_ALIAS),
                    stddev(col(name)).alias(STDDEV_A_ALIAS),
                ],
            )?
            .collect()
            .await?;
        let batch = first_row_batch(&batches)?;

        Ok(scalar_f64(batch, COUNT_ALIAS)?.is_some_and(|n| n >= 2.0)
            && varies(scalar_f64(batch, STDDEV_A_ALIAS)?))
    }

    /// Pairwise correlation of `columns`, mirrored off-diagonal. The diagonal
    /// is 1.0 for a varying column and NaN otherwise.
    pub async fn correlation_matrix(&self, columns: &[&str]) -> Result<CorrelationMatrix> {
        let n = columns.len();
        let mut values = vec![vec![f64::NAN; n]; n];

        for i in 0..n {
            if self.column_varies(columns[i]).await? {
                values[i][i] = 1.0;
            }
            for j in (i + 1)..n {
                let r = self.correlation(columns[i], columns[j]).await?;
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(CorrelationMatrix {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            values,
        })
    }
}

fn first_row_batch(batches: &[RecordBatch]) -> Result<&RecordBatch> {
    batches
        .iter()
        .find(|b| b.num_rows() > 0)
        .ok_or_else(|| DemoError::MissingData("Aggregate produced no rows".to_string()))
}

/// First value of a single-row aggregate column, `None` when NULL
fn scalar_f64(batch: &RecordBatch, name: &str) -> Result<Option<f64>> {
    let column = column_as(batch, name, &DataType::Float64)?;
    let column = downcast::<Float64Array>(&column, name)?;
    if column.is_null(0) {
        Ok(None)
    } else {
        Ok(Some(column.value(0)))
    }
}

fn varies(stddev: Option<f64>) -> bool {
    stddev.is_some_and(|sd| sd.is_finite() && sd > 0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Row per variable, one Float64 column per variable
    pub fn to_batch(&self) -> Result<RecordBatch> {
        let mut fields = vec![Field::new(MATRIX_LABEL_COLUMN, DataType::Utf8, false)];
        fields.extend(
            self.columns
                .iter()
                .map(|c| Field::new(c.as_str(), DataType::Float64, false)),
        );

        let mut arrays: Vec<Arc<dyn Array>> = vec![Arc::new(StringArray::from(
            self.columns.iter().map(String::as_str).collect::<Vec<_>>(),
        ))];
        for j in 0..self.columns.len() {
            let column: Vec<f64> = self.values.iter().map(|row| row[j]).collect();
            arrays.push(Arc::new(Float64Array::from(column)));
        }

        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
    }
}
