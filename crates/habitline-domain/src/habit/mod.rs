mod aggregate;
mod analytics;
mod repository;
mod value_objects;

#[cfg(test)]
mod analytics_test;

pub use aggregate::Habit;
pub use analytics::{completion_rate, longest_streak, streak_timeline, StreakPoint};
pub use repository::HabitRepository;
pub use value_objects::Difficulty;
