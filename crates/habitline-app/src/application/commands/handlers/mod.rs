mod add_habit_handler;
mod complete_habit_handler;
mod add_reminder_handler;


pub use add_habit_handler::AddHabitCommandHandler;
pub use complete_habit_handler::CompleteHabitCommandHandler;
pub use add_reminder_handler::AddReminderCommandHandler;
