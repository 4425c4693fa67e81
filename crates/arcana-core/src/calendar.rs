//! Sources of "today" for the daily card.

use chrono::{Local, NaiveDate};

use crate::error::{ArcanaError, ArcanaResult};

/// Supplies the current local calendar date.
pub trait Calendar {
    /// The date the daily card should be drawn for.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalendar;

impl Calendar for LocalCalendar {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar(pub NaiveDate);

impl FixedCalendar {
    /// Parse a `YYYY-MM-DD` string into a fixed calendar.
    pub fn parse(s: &str) -> ArcanaResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ArcanaError::InvalidDate(s.to_string()))
    }
}

impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
