use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::DomainError;

/// A wall-clock minute in strict zero-padded `HH:MM` form.
///
/// Parsing is deliberately stricter than chrono's `%H:%M`, which also
/// accepts un-padded fields like "9:30". Reminder matching compares whole
/// minutes, so only the canonical two-digit form is allowed in; anything
/// else is rejected at the boundary instead of silently never firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
}

impl ReminderTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 {
            return Err(DomainError::InvalidReminderTime(format!(
                "Hour must be between 0 and 23, got {}",
                hour
            )));
        }
        if minute > 59 {
            return Err(DomainError::InvalidReminderTime(format!(
                "Minute must be between 0 and 59, got {}",
                minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parse exactly `HH:MM` with two digits per field.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid =
            || DomainError::InvalidReminderTime(format!("Expected HH:MM (24-hour), got '{}'", s));

        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }
        if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u8 = hh.parse().map_err(|_| invalid())?;
        let minute: u8 = mm.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// True when `now` falls inside this reminder's minute.
    pub fn matches(&self, now: NaiveTime) -> bool {
        now.hour() == self.hour as u32 && now.minute() == self.minute as u32
    }
}

impl std::fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// Wire form is the canonical "HH:MM" string, same as the display form.

impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ReminderTime::parse(&s).map_err(serde::de::Error::custom)
    }
}
