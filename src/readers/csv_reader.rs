use crate::error::Result;
use crate::models::ClimateObservation;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads replacement datasets with header `city,reading_date,temperature,humidity`
pub struct ObservationReader;

impl ObservationReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_csv(&self, path: &Path) -> Result<Vec<ClimateObservation>> {
        debug!("Reading observations from {}", path.display());
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    /// Parse and validate every record; the first bad record aborts the load
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<ClimateObservation>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut observations = Vec::new();
        for record in reader.deserialize() {
            let observation: ClimateObservation = record?;
            observation.check()?;
            observations.push(observation);
        }

        debug!("Loaded {} observations", observations.len());
        Ok(observations)
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use chrono::NaiveDate;

    #[test]
    fn test_read_valid_csv() {
        let data = "city,reading_date,temperature,humidity\n\
                    Boston, 2025-02-01, -1.5, 60\n\
                    Miami,2025-02-01,24.0,80.5\n";
        let observations = ObservationReader::new().read_from(data.as_bytes()).unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].city, "Boston");
        assert_eq!(
            observations[0].reading_date,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
        assert_eq!(observations[1].humidity, 80.5);
    }

    #[test]
    fn test_non_numeric_temperature_rejected() {
        let data = "city,reading_date,temperature,humidity\nBoston,2025-02-01,cold,60\n";
        let result = ObservationReader::new().read_from(data.as_bytes());
        assert!(matches!(result, Err(DemoError::Csv(_))));
    }

    #[test]
    fn test_invalid_humidity_rejected() {
        let data = "city,reading_date,temperature,humidity\nBoston,2025-02-01,3.0,140\n";
        let result = ObservationReader::new().read_from(data.as_bytes());
        assert!(matches!(result, Err(DemoError::Validation(_))));
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        let data = "city,reading_date,temperature,humidity\n";
        let observations = ObservationReader::new().read_from(data.as_bytes()).unwrap();
        assert!(observations.is_empty());
    }
}
