pub mod csv_reader;
pub mod sample;

pub use csv_reader::ObservationReader;
pub use sample::sample_observations;
