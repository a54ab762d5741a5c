pub mod columns;
pub mod constants;
pub mod dates;
pub mod logging;

pub use constants::*;
pub use dates::{date_to_days, days_to_date};
pub use logging::init_logging;
