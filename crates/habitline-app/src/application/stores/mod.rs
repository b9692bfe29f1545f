mod habit_store;
mod reminder_store;

pub use habit_store::HabitStore;
pub use reminder_store::ReminderStore;
