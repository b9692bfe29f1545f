use serde::{Deserialize, Serialize};

use habitline_domain::habit::Habit;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDto {
    pub name: String,
    pub streak: u32,
    pub difficulty: String,
    pub last_completed: Option<String>, // ISO 8601 date (YYYY-MM-DD)
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            name: habit.name().to_string(),
            streak: habit.streak(),
            difficulty: habit.difficulty().to_string(),
            last_completed: habit
                .last_completed()
                .map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}
