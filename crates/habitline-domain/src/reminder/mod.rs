mod repository;
mod types;
mod value_objects;


pub use repository::ReminderRepository;
pub use types::Reminder;
pub use value_objects::ReminderTime;
