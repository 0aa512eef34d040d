use std::str::FromStr;

use chrono::format::{Item, Numeric, Pad, Parsed};
use chrono::Datelike;
use thiserror::Error;

use crate::{Date, Minutes, Time};

#[derive(Debug, Error, Eq, PartialEq)]
#[error("Expected a time in the format hh:mm")]
pub struct TimeError;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DateError {
    #[error("Expected a date in the format YYYY-MM-DD")]
    Format,
    #[error("Invalid date")]
    Date,
}

fn two_digits(s: &str) -> Result<u8, TimeError> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().map_err(|_| TimeError)
    } else {
        Err(TimeError)
    }
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = s.split_once(':').ok_or(TimeError)?;
        Time::new(two_digits(hour)?, two_digits(minute)?).ok_or(TimeError)
    }
}

/// Parses a clock token such as `09:30` into minutes since midnight.
///
/// Surrounding whitespace is ignored. Absent, blank and malformed tokens as well as
/// out of range hours or minutes yield `None`.
#[must_use]
pub fn parse_time(token: Option<&str>) -> Option<Minutes> {
    token?
        .trim()
        .parse()
        .ok()
        .map(Time::minutes_since_midnight)
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        const ITEMS: &[Item<'static>] = &[
            Item::Numeric(Numeric::Year, Pad::Zero),
            Item::Literal("-"),
            Item::Numeric(Numeric::Month, Pad::Zero),
            Item::Literal("-"),
            Item::Numeric(Numeric::Day, Pad::Zero),
        ];

        // chrono accepts signs, short years and padding whitespace, none of which belong here
        let year = s.split_once('-').map_or(s, |(year, _)| year);
        if year.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
            return Err(DateError::Format);
        }

        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, s, ITEMS.iter()).map_err(|_| DateError::Format)?;
        let date = parsed.to_naive_date().map_err(|_| DateError::Date)?;
        // the calendar starts at year 1, chrono's proleptic year 0 does not exist
        if date.year() < 1 {
            return Err(DateError::Date);
        }
        Ok(Date(date))
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use crate::parse::{parse_time, DateError, TimeError};
    use crate::{Date, Minutes, Time};

    #[test]
    fn test_parse_time() {
        assert_eq!("10:02".parse(), Ok(Time::new(10, 2).unwrap()));
        assert_eq!("10:20".parse(), Ok(Time::new(10, 20).unwrap()));
        assert_eq!("00:20".parse(), Ok(Time::new(0, 20).unwrap()));
        assert_eq!("23:59".parse(), Ok(Time::new(23, 59).unwrap()));

        let tests = [
            "10:2", "1:20", "10", ":10", "10:", "", "24:00", "12:60", "+9:30", "09:+5", "0930",
            "09-30", "09:30:00", "ab:cd", "０９:３０",
        ];
        for text in tests {
            assert_eq!(text.parse::<Time>(), Err(TimeError), "{text}");
        }
    }

    #[test]
    fn test_parse_time_token() {
        assert_eq!(parse_time(Some("09:30")), Some(Minutes::from(570)));
        assert_eq!(parse_time(Some("  18:00 ")), Some(Minutes::from(1080)));
        assert_eq!(parse_time(Some("00:00")), Some(Minutes::default()));
        assert_eq!(parse_time(Some("23:59")), Some(Minutes::from(1439)));
        assert_eq!(parse_time(None), None);
        assert_eq!(parse_time(Some("")), None);
        assert_eq!(parse_time(Some("   ")), None);
        assert_eq!(parse_time(Some("9:30")), None);
        assert_eq!(parse_time(Some("25:00")), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            "2024-01-10".parse(),
            Ok(Date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()))
        );
        assert_eq!(
            "2024-02-29".parse(),
            Ok(Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()))
        );
        assert_eq!(
            "0001-01-01".parse(),
            Ok(Date(NaiveDate::from_ymd_opt(1, 1, 1).unwrap()))
        );

        let tests = [
            ("", DateError::Format),
            ("2024/01/10", DateError::Format),
            ("2024.01.10", DateError::Format),
            ("24-01-10", DateError::Format),
            ("+2024-01-10", DateError::Format),
            (" 2024-01-10", DateError::Format),
            ("2024-01-10 ", DateError::Format),
            ("2024-01", DateError::Format),
            ("2024-02-30", DateError::Date),
            ("2023-02-29", DateError::Date),
            ("2024-04-31", DateError::Date),
            ("0000-01-01", DateError::Date),
            ("0000-12-31", DateError::Date),
        ];

        for (text, e) in tests {
            assert_eq!(text.parse::<Date>(), Err(e), "{text}");
        }

        for text in ["2024-13-01", "2024-00-10", "2024-01-32", "2024-01-00"] {
            assert!(text.parse::<Date>().is_err(), "{text}");
        }
    }
}
