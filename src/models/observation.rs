use crate::error::{DemoError, Result};
use crate::utils::constants::{MAX_HUMIDITY, MAX_VALID_TEMP, MIN_HUMIDITY, MIN_VALID_TEMP};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single climate reading for one city on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClimateObservation {
    #[validate(length(min = 1))]
    pub city: String,

    pub reading_date: NaiveDate,

    #[validate(range(min = MIN_VALID_TEMP, max = MAX_VALID_TEMP))]
    pub temperature: f64,

    #[validate(range(min = MIN_HUMIDITY, max = MAX_HUMIDITY))]
    pub humidity: f64,
}

impl ClimateObservation {
    pub fn new(
        city: impl Into<String>,
        reading_date: NaiveDate,
        temperature: f64,
        humidity: f64,
    ) -> Self {
        Self {
            city: city.into(),
            reading_date,
            temperature,
            humidity,
        }
    }

    /// Field rules plus finiteness; range checks alone let NaN through
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if !self.temperature.is_finite() || !self.humidity.is_finite() {
            return Err(DemoError::InvalidFormat(format!(
                "Non-finite reading for {} on {}",
                self.city, self.reading_date
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_observation_validation() {
        let obs = ClimateObservation::new("Houston", date(), 10.2, 70.0);
        assert!(obs.validate().is_ok());
    }

    #[test]
    fn test_empty_city_rejected() {
        let obs = ClimateObservation::new("", date(), 10.2, 70.0);
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(ClimateObservation::new("Houston", date(), 10.2, 101.0).validate().is_err());
        assert!(ClimateObservation::new("Houston", date(), 10.2, -1.0).validate().is_err());
        assert!(ClimateObservation::new("Houston", date(), 75.0, 50.0).validate().is_err());
        assert!(ClimateObservation::new("Houston", date(), f64::NAN, 50.0).check().is_err());
        assert!(ClimateObservation::new("Houston", date(), 10.2, f64::INFINITY).check().is_err());
    }

    #[test]
    fn test_limits_are_inclusive() {
        let coldest = ClimateObservation::new("Vostok", date(), MIN_VALID_TEMP, MIN_HUMIDITY);
        let hottest = ClimateObservation::new("Furnace Creek", date(), MAX_VALID_TEMP, MAX_HUMIDITY);
        let too_hot = ClimateObservation::new("Furnace Creek", date(), MAX_VALID_TEMP + 0.1, 10.0);

        assert!(coldest.check().is_ok());
        assert!(hottest.check().is_ok());
        assert!(too_hot.check().is_err());
    }

    #[test]
    fn test_serde_date_format() {
        let obs = ClimateObservation::new("Chicago", date(), -7.0, 50.0);
        let json = serde_json::to_string(&obs).unwrap();
        assert!(json.contains("\"reading_date\":\"2025-01-01\""));
        let back: ClimateObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }
}
