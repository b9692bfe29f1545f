use serde::{Deserialize, Serialize};

use habitline_domain::reminder::Reminder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderDto {
    pub habit: String,
    pub time: String, // HH:MM
}

impl From<&Reminder> for ReminderDto {
    fn from(reminder: &Reminder) -> Self {
        Self {
            habit: reminder.habit.clone(),
            time: reminder.time.to_string(),
        }
    }
}
