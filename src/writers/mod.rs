pub mod parquet_writer;

pub use parquet_writer::{ParquetFileInfo, ParquetWriter};
