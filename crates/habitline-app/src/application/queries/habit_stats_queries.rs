use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::application::dtos::{HabitStatsDto, StreakPointDto, StreakTimelineDto};
use crate::application::stores::HabitStore;
use habitline_domain::habit::{completion_rate, longest_streak, streak_timeline, Habit};
use habitline_domain::shared::DomainError;

/// Read-side statistics over the habit store.
///
/// `today` is passed in by the caller so the rate computation stays
/// deterministic under test; the analytics themselves never touch the clock.
pub struct HabitStatsQueries {
    habit_store: Arc<HabitStore>,
}

impl HabitStatsQueries {
    pub fn new(habit_store: Arc<HabitStore>) -> Self {
        Self { habit_store }
    }

    /// Get statistics for a single habit
    pub async fn get_stats(
        &self,
        name: &str,
        today: NaiveDate,
    ) -> Result<HabitStatsDto, DomainError> {
        let habit = self
            .habit_store
            .get(name)
            .await
            .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;

        let dto = Self::stats_for(&habit, today);
        info!(
            "[stats] get_stats habit={} current={} longest={} rate={:.2}%",
            dto.name, dto.current_streak, dto.longest_streak, dto.completion_rate
        );
        Ok(dto)
    }

    /// Get statistics for all habits, sorted by name
    pub async fn get_all_stats(&self, today: NaiveDate) -> Vec<HabitStatsDto> {
        let habits = self.habit_store.list().await;
        let results: Vec<HabitStatsDto> =
            habits.iter().map(|h| Self::stats_for(h, today)).collect();

        info!("[stats] get_all_stats total_habits={}", results.len());
        results
    }

    /// Get the per-day streak timeline for a single habit
    pub async fn get_timeline(&self, name: &str) -> Result<StreakTimelineDto, DomainError> {
        let habit = self
            .habit_store
            .get(name)
            .await
            .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;

        let dto = Self::timeline_for(&habit);
        info!(
            "[stats] get_timeline habit={} points={}",
            dto.name,
            dto.points.len()
        );
        Ok(dto)
    }

    /// Get streak timelines for all habits, sorted by name
    pub async fn get_all_timelines(&self) -> Vec<StreakTimelineDto> {
        let habits = self.habit_store.list().await;
        let results: Vec<StreakTimelineDto> = habits.iter().map(Self::timeline_for).collect();

        info!("[stats] get_all_timelines total_habits={}", results.len());
        results
    }

    fn stats_for(habit: &Habit, today: NaiveDate) -> HabitStatsDto {
        HabitStatsDto {
            name: habit.name().to_string(),
            current_streak: habit.streak(),
            longest_streak: longest_streak(habit.history()),
            completion_rate: completion_rate(habit.history(), today),
            total_completed_days: habit.total_completed_days(),
            difficulty: habit.difficulty().to_string(),
        }
    }

    fn timeline_for(habit: &Habit) -> StreakTimelineDto {
        StreakTimelineDto {
            name: habit.name().to_string(),
            points: streak_timeline(habit.history())
                .into_iter()
                .map(|p| StreakPointDto {
                    date: p.date.format("%Y-%m-%d").to_string(),
                    streak: p.streak,
                })
                .collect(),
        }
    }
}
