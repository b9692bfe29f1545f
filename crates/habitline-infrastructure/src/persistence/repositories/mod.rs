mod habit_repo;
mod reminder_repo;

pub use habit_repo::JsonHabitRepository;
pub use reminder_repo::JsonReminderRepository;
