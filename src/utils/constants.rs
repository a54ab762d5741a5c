/// Table and column names
pub const DEFAULT_TABLE_NAME: &str = "climate_data";
pub const COL_ID: &str = "id";
pub const COL_CITY: &str = "city";
pub const COL_READING_DATE: &str = "reading_date";
pub const COL_TEMPERATURE: &str = "temperature";
pub const COL_HUMIDITY: &str = "humidity";
pub const COL_AVG_TEMP: &str = "avg_temp";
pub const COL_AVG_HUMIDITY: &str = "avg_humidity";
pub const COL_TEMP_RANK: &str = "temp_rank";

/// Observation constraints
pub const MIN_VALID_TEMP: f64 = -90.0;
pub const MAX_VALID_TEMP: f64 = 60.0;
pub const MIN_HUMIDITY: f64 = 0.0;
pub const MAX_HUMIDITY: f64 = 100.0;

/// Report section titles
pub const TITLE_AVERAGES: &str = "Average Temperature & Humidity by City";
pub const TITLE_RANKS: &str = "Window Function: Temperature Rank per Date";
pub const TITLE_HOTTEST: &str = "CTE: Hottest City per Date";
pub const TITLE_FULL_TABLE: &str = "Full climate_data Table";
pub const TITLE_CORRELATION: &str = "Correlation Matrix between Temperature & Humidity";

/// Processing defaults
pub const DEFAULT_HEAD_ROWS: usize = 5;
pub const DEFAULT_TARGET_PARTITIONS: usize = 1;
pub const DEFAULT_COMPRESSION: &str = "snappy";

/// Days between 0001-01-01 (CE day 1) and 1970-01-01
pub const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;
