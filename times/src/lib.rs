#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod entry;
pub mod format;
pub mod parse;
pub mod report;
pub mod verdict;
pub mod verify;

pub use chrono::NaiveDate;
use derive_more::{Add, From, Sub};

/// A wall clock time of day.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
}

impl Time {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    #[must_use]
    pub fn minutes_since_midnight(self) -> Minutes {
        Minutes::from(i64::from(self.hour) * 60 + i64::from(self.minute))
    }
}

/// A signed amount of minutes.
#[derive(Debug, Default, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, From, Add, Sub)]
pub struct Minutes(i64);

impl Minutes {
    pub const DAY: Minutes = Minutes(24 * 60);

    #[must_use]
    pub fn into_inner(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

/// A calendar date without time zone.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct Date(pub NaiveDate);

impl Date {
    /// The current date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }
}
