use crate::error::{DemoError, Result};
use crate::utils::constants::UNIX_EPOCH_DAYS_FROM_CE;
use chrono::{Datelike, NaiveDate};

/// Convert a calendar date to the Arrow `Date32` representation (days since 1970-01-01)
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use climate_sql_demo::utils::date_to_days;
///
/// let date = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
/// assert_eq!(date_to_days(date), 1);
/// ```
pub fn date_to_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Convert an Arrow `Date32` value back to a calendar date
pub fn days_to_date(days: i32) -> Result<NaiveDate> {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| DemoError::InvalidFormat(format!("Date32 value out of range: {}", days)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_day_zero() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(date_to_days(epoch), 0);
        assert_eq!(days_to_date(0).unwrap(), epoch);
    }

    #[test]
    fn test_dates_before_epoch() {
        let date = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
        assert_eq!(date_to_days(date), -1);
    }

    #[test]
    fn test_reading_date_conversion() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let days = date_to_days(date);
        assert_eq!(days, 20091);
        assert_eq!(days_to_date(days).unwrap(), date);
    }

    #[test]
    fn test_out_of_range_days() {
        assert!(days_to_date(i32::MAX).is_err());
        assert!(days_to_date(i32::MIN).is_err());
    }
}
