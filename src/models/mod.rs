pub mod observation;
pub mod results;

pub use observation::ClimateObservation;
pub use results::{CityAverage, DailyRank};
