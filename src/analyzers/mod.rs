pub mod climate_frame;
pub mod statistics;

pub use climate_frame::{ClimateFrame, CorrelationMatrix};
pub use statistics::{mean, pearson};
