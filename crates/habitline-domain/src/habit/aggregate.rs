use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value_objects::Difficulty;
use crate::shared::DomainError;

/// A tracked habit, identified by its (unique) name.
///
/// `streak` is an independently maintained counter: it advances on every
/// accepted completion and is never reconciled against `history`, even if
/// the history is edited out-of-band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    name: String,
    streak: u32,
    last_completed: Option<NaiveDate>,
    history: BTreeMap<NaiveDate, bool>,
    difficulty: Difficulty,
}

impl Habit {
    pub fn new(name: String, difficulty: Difficulty) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.trim().to_string(),
            streak: 0,
            last_completed: None,
            history: BTreeMap::new(),
            difficulty,
        })
    }

    /// Rehydrate a habit from persisted state, bypassing creation validation.
    pub fn restore(
        name: String,
        streak: u32,
        last_completed: Option<NaiveDate>,
        history: BTreeMap<NaiveDate, bool>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name,
            streak,
            last_completed,
            history,
            difficulty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.last_completed
    }

    pub fn history(&self) -> &BTreeMap<NaiveDate, bool> {
        &self.history
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Record a completion for `today`.
    ///
    /// At most one completion per calendar day is accepted; a repeat call on
    /// the same date fails with `AlreadyCompleted` and changes nothing.
    pub fn mark_complete(&mut self, today: NaiveDate) -> Result<(), DomainError> {
        if self.last_completed == Some(today) {
            return Err(DomainError::AlreadyCompleted(format!(
                "'{}' is already done for {}",
                self.name, today
            )));
        }

        self.streak += 1;
        self.last_completed = Some(today);
        self.history.insert(today, true);
        Ok(())
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.history.get(&date).copied().unwrap_or(false)
    }

    /// Number of days with a recorded completion.
    pub fn total_completed_days(&self) -> u32 {
        self.history.values().filter(|&&done| done).count() as u32
    }
}
