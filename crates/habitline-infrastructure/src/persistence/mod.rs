// JSON document persistence
//
// Each store is one flat file rewritten whole on every save. The documents
// are plain user-editable JSON; there are no atomic-write or locking
// guarantees, and no schema migration.

pub mod repositories;

pub use repositories::{JsonHabitRepository, JsonReminderRepository};

/// Habit document file name, resolved against the data directory.
pub const HABITS_FILE: &str = "habits.json";
/// Reminder document file name, resolved against the data directory.
pub const REMINDERS_FILE: &str = "reminders.json";
