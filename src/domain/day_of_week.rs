//! Day-of-week value object.

use chrono::Weekday;
use std::fmt;

/// A day of the week, Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Recognized English day names, indexed Sunday = 0.
const DAY_NAMES: [(&str, DayOfWeek); 7] = [
    ("sunday", DayOfWeek::Sunday),
    ("monday", DayOfWeek::Monday),
    ("tuesday", DayOfWeek::Tuesday),
    ("wednesday", DayOfWeek::Wednesday),
    ("thursday", DayOfWeek::Thursday),
    ("friday", DayOfWeek::Friday),
    ("saturday", DayOfWeek::Saturday),
];

impl DayOfWeek {
    /// Parse an English day name, case-insensitively.
    ///
    /// Returns `None` for anything outside the seven recognized names.
    pub fn parse(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        DAY_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == lowered)
            .map(|(_, day)| *day)
    }

    /// Numeric index, Sunday = 0 through Saturday = 6.
    pub fn index(&self) -> u8 {
        match self {
            DayOfWeek::Sunday => 0,
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
        }
    }

    /// Whether a chrono weekday falls on this day.
    pub fn matches(&self, weekday: Weekday) -> bool {
        u32::from(self.index()) == weekday.num_days_from_sunday()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        };
        write!(f, "{}", name)
    }
}
