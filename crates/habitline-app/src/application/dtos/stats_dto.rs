use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitStatsDto {
    pub name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate: f64, // percentage (0.0 - 100.0)
    pub total_completed_days: u32,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakTimelineDto {
    pub name: String,
    pub points: Vec<StreakPointDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakPointDto {
    pub date: String, // YYYY-MM-DD
    pub streak: u32,
}
