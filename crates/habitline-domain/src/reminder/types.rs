use serde::{Deserialize, Serialize};

use super::value_objects::ReminderTime;

/// A (habit, time-of-day) pair checked once per minute by the poller.
///
/// The habit name is not validated against the habit store; a reminder may
/// mention a habit that was never created. Duplicate pairs are permitted
/// and each fires on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub habit: String,
    pub time: ReminderTime,
}

impl Reminder {
    pub fn new(habit: impl Into<String>, time: ReminderTime) -> Self {
        Self {
            habit: habit.into(),
            time,
        }
    }
}
