mod habit_dto;
mod reminder_dto;
mod stats_dto;

pub use habit_dto::HabitDto;
pub use reminder_dto::ReminderDto;
pub use stats_dto::{HabitStatsDto, StreakPointDto, StreakTimelineDto};
