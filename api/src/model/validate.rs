//! Field rules shared by the request types.

use chrono::{NaiveDate, NaiveTime};
use kernel::model::schedule::Weekday;

/// `YYYY-MM-DD` calendar date.
pub fn is_date(value: &str, _: &()) -> garde::Result {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| garde::Error::new("expected a YYYY-MM-DD date"))
}

/// Zero padded `HH:MM`. Slot windows are compared as strings, so the
/// padding matters.
pub fn is_clock_time(value: &str, _: &()) -> garde::Result {
    if value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok() {
        Ok(())
    } else {
        Err(garde::Error::new("expected a zero padded HH:MM time"))
    }
}

pub fn is_weekday(value: &str, _: &()) -> garde::Result {
    Weekday::parse(value)
        .map(|_| ())
        .ok_or_else(|| garde::Error::new("expected a weekday name"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert!(is_date("2024-06-04", &()).is_ok());
        assert!(is_date("2024-02-30", &()).is_err());
        assert!(is_date("04/06/2024", &()).is_err());
    }

    #[test]
    fn clock_times_need_padding() {
        assert!(is_clock_time("09:00", &()).is_ok());
        assert!(is_clock_time("23:59", &()).is_ok());
        assert!(is_clock_time("9:00", &()).is_err());
        assert!(is_clock_time("24:00", &()).is_err());
    }

    #[test]
    fn weekdays_in_any_casing() {
        assert!(is_weekday("Miércoles", &()).is_ok());
        assert!(is_weekday("sabado", &()).is_ok());
        assert!(is_weekday("Someday", &()).is_err());
    }
}
