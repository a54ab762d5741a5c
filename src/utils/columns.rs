use crate::error::{DemoError, Result};
use arrow::array::{Array, ArrayRef};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

/// Fetch a column by name, cast to `target` so that engine-chosen physical
/// types (view strings from Parquet, narrower numerics) decode uniformly.
pub fn column_as(batch: &RecordBatch, name: &str, target: &DataType) -> Result<ArrayRef> {
    let column = batch.column_by_name(name).ok_or_else(|| {
        DemoError::MissingData(format!("Column '{}' not found in result set", name))
    })?;

    if column.data_type() == target {
        return Ok(column.clone());
    }

    Ok(cast(column, target)?)
}

/// Downcast a cast column to its concrete array type
pub fn downcast<'a, T: Array + 'static>(array: &'a ArrayRef, name: &str) -> Result<&'a T> {
    array
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| DemoError::InvalidFormat(format!("Invalid {} column type", name)))
}

/// Reject nulls in a column that the schema declares NOT NULL
pub fn ensure_no_nulls(array: &ArrayRef, name: &str) -> Result<()> {
    if array.null_count() > 0 {
        return Err(DemoError::MissingData(format!(
            "Column '{}' contains {} null values",
            name,
            array.null_count()
        )));
    }
    Ok(())
}
