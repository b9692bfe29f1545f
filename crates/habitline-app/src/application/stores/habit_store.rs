use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::info;
use tokio::sync::RwLock;

use habitline_domain::habit::{Difficulty, Habit, HabitRepository};
use habitline_domain::shared::DomainError;

/// In-memory habit state backed by the repository document.
///
/// Mutations are applied to a copy of the mapping and committed only after
/// the repository write succeeds, so a failed save leaves memory and disk
/// consistent with each other.
pub struct HabitStore {
    repo: Arc<dyn HabitRepository>,
    habits: RwLock<HashMap<String, Habit>>,
}

impl HabitStore {
    pub fn new(repo: Arc<dyn HabitRepository>) -> Self {
        Self {
            repo,
            habits: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the in-memory state with the persisted document.
    pub async fn load(&self) -> Result<(), DomainError> {
        let loaded = self.repo.load().await?;
        let mut habits = self.habits.write().await;
        *habits = loaded;
        info!("[habits] store loaded, {} habits", habits.len());
        Ok(())
    }

    pub async fn add(&self, name: &str, difficulty: Difficulty) -> Result<String, DomainError> {
        let habit = Habit::new(name.to_string(), difficulty)?;
        let name = habit.name().to_string();

        let mut habits = self.habits.write().await;
        if habits.contains_key(&name) {
            return Err(DomainError::DuplicateHabit(name));
        }

        let mut next = habits.clone();
        next.insert(name.clone(), habit);
        self.repo.save(&next).await?;
        *habits = next;

        info!("[habits] added '{}' ({})", name, difficulty);
        Ok(name)
    }

    /// Mark a habit complete for `today` and return the new streak.
    pub async fn mark_complete(&self, name: &str, today: NaiveDate) -> Result<u32, DomainError> {
        let mut habits = self.habits.write().await;
        let mut habit = habits
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;

        habit.mark_complete(today)?;
        let streak = habit.streak();

        let mut next = habits.clone();
        next.insert(name.to_string(), habit);
        self.repo.save(&next).await?;
        *habits = next;

        info!("[habits] '{}' completed for {}, streak {}", name, today, streak);
        Ok(streak)
    }

    /// Habits sorted by name.
    pub async fn list(&self) -> Vec<Habit> {
        let habits = self.habits.read().await;
        let mut list: Vec<Habit> = habits.values().cloned().collect();
        list.sort_by(|a, b| a.name().cmp(b.name()));
        list
    }

    pub async fn get(&self, name: &str) -> Option<Habit> {
        self.habits.read().await.get(name).cloned()
    }

    pub async fn count(&self) -> usize {
        self.habits.read().await.len()
    }
}
