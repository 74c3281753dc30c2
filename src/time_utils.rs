//! Wall-clock helpers used for the greeting, the header clock and the prompt
//! context. Every function takes the timestamp explicitly so callers decide
//! what "now" is.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// 05:00-11:59 morning, 12:00-16:59 afternoon, 17:00-20:59 evening,
    /// everything else night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn at<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Self::from_hour(t.hour())
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// `14:05`
pub fn format_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%H:%M").to_string()
}

/// `Monday, October 19, 2026`
pub fn format_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%A, %B %-d, %Y").to_string()
}
