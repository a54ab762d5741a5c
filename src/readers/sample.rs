use crate::models::ClimateObservation;
use chrono::NaiveDate;

// Fictional readings, three consecutive January days for four cities.
const SAMPLE_ROWS: [(&str, (i32, u32, u32), f64, f64); 12] = [
    ("New York", (2025, 1, 1), -5.2, 35.0),
    ("New York", (2025, 1, 2), -2.1, 40.0),
    ("New York", (2025, 1, 3), 0.5, 42.0),
    ("Chicago", (2025, 1, 1), -7.0, 50.0),
    ("Chicago", (2025, 1, 2), -5.5, 55.0),
    ("Chicago", (2025, 1, 3), -3.2, 48.0),
    ("Houston", (2025, 1, 1), 10.2, 70.0),
    ("Houston", (2025, 1, 2), 12.1, 68.0),
    ("Houston", (2025, 1, 3), 15.0, 65.0),
    ("San Diego", (2025, 1, 1), 15.2, 55.0),
    ("San Diego", (2025, 1, 2), 16.5, 52.0),
    ("San Diego", (2025, 1, 3), 18.0, 50.0),
];

/// The fixed demonstration dataset, in insertion order
pub fn sample_observations() -> Vec<ClimateObservation> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|&(city, (year, month, day), temperature, humidity)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| ClimateObservation::new(city, date, temperature, humidity))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_sample_is_complete_and_valid() {
        let observations = sample_observations();
        assert_eq!(observations.len(), SAMPLE_ROWS.len());
        assert!(observations.iter().all(|o| o.check().is_ok()));
    }

    #[test]
    fn test_sample_covers_four_cities_three_days() {
        let observations = sample_observations();
        let cities: BTreeSet<_> = observations.iter().map(|o| o.city.as_str()).collect();
        let dates: BTreeSet<_> = observations.iter().map(|o| o.reading_date).collect();
        assert_eq!(cities.len(), 4);
        assert_eq!(dates.len(), 3);
    }
}
