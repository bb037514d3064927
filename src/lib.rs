mod age;
mod consts;
mod prelude;
mod types;

pub use age::{AgeError, AgeYears};
pub use consts::*;
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A day/month/year triple guaranteed to name a real day on the
/// proleptic Gregorian calendar, with the year in `1..=MAX_YEAR`.
/// Construction either fully succeeds or fails; no instance can hold a
/// day that does not exist in its month.
///
/// Ordering is lexicographic on (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "day.get()", "month.get()", "year.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {_0} (expected DD/MM/YYYY)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid calendar date: {day:02}/{month:02}/{year:04}")]
    InvalidDate { day: u8, month: u8, year: u16 },
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its components, rejecting any triple that does
    /// not exist on the calendar: month 0 or 13, day 0, day 31 in a
    /// 30-day month, Feb 29 outside a leap year, year 0 or above
    /// `MAX_YEAR`.
    ///
    /// A constructed date reads back exactly the components it was given;
    /// out-of-range values are never rolled over into a neighbouring
    /// month or year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the triple is not a real date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDate { day, month, year };
        let year_c = types::Year::new(year).ok_or_else(invalid)?;
        let month_c = types::Month::new(month).ok_or_else(invalid)?;
        let day_c = types::Day::new(day, year, month).ok_or_else(invalid)?;
        Ok(Self {
            year: year_c,
            month: month_c,
            day: day_c,
        })
    }

    /// Returns the day component (1-indexed)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month component (1-indexed)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses a strict `DD/MM/YYYY` date: exactly two digits, a slash,
    /// two digits, a slash, four digits. Surrounding whitespace is
    /// ignored; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let day = Self::parse_field_u8(day, DAY_WIDTH)?;
        let month = Self::parse_field_u8(month, MONTH_WIDTH)?;
        let year = Self::parse_field_u16(year, YEAR_WIDTH)?;

        Self::from_ymd(year, month, day)
    }
}

impl CalendarDate {
    /// Helper to parse a field of exactly `width` ASCII digits
    fn parse_field_u8(s: &str, width: usize) -> Result<u8, ParseError> {
        if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse a field of exactly `width` ASCII digits
    fn parse_field_u16(s: &str, width: usize) -> Result<u16, ParseError> {
        if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
