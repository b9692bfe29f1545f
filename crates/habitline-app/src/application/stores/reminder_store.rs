use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

use habitline_domain::reminder::{Reminder, ReminderRepository, ReminderTime};
use habitline_domain::shared::DomainError;

/// In-memory reminder list backed by the repository document.
///
/// Reminders are append-only. Duplicates are permitted and the habit name is
/// deliberately not checked against the habit store.
pub struct ReminderStore {
    repo: Arc<dyn ReminderRepository>,
    reminders: RwLock<Vec<Reminder>>,
}

impl ReminderStore {
    pub fn new(repo: Arc<dyn ReminderRepository>) -> Self {
        Self {
            repo,
            reminders: RwLock::new(Vec::new()),
        }
    }

    pub async fn load(&self) -> Result<(), DomainError> {
        let loaded = self.repo.load().await?;
        let mut reminders = self.reminders.write().await;
        *reminders = loaded;
        info!("[reminders] store loaded, {} reminders", reminders.len());
        Ok(())
    }

    pub async fn add(&self, habit: &str, time: ReminderTime) -> Result<Reminder, DomainError> {
        let habit = habit.trim();
        if habit.is_empty() {
            return Err(DomainError::Validation(
                "Reminder habit name cannot be empty".to_string(),
            ));
        }
        let reminder = Reminder::new(habit, time);

        let mut reminders = self.reminders.write().await;
        let mut next = reminders.clone();
        next.push(reminder.clone());
        self.repo.save(&next).await?;
        *reminders = next;

        info!("[reminders] added '{}' at {}", reminder.habit, reminder.time);
        Ok(reminder)
    }

    /// Reminders in insertion order.
    pub async fn list(&self) -> Vec<Reminder> {
        self.reminders.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.reminders.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct InMemoryReminderRepository {
        saved: tokio::sync::RwLock<Vec<Reminder>>,
    }

    impl InMemoryReminderRepository {
        fn new() -> Self {
            Self {
                saved: tokio::sync::RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReminderRepository for InMemoryReminderRepository {
        async fn load(&self) -> Result<Vec<Reminder>, DomainError> {
            Ok(self.saved.read().await.clone())
        }

        async fn save(&self, reminders: &[Reminder]) -> Result<(), DomainError> {
            let mut saved = self.saved.write().await;
            *saved = reminders.to_vec();
            Ok(())
        }
    }

    struct FailingSaveRepository;

    #[async_trait]
    impl ReminderRepository for FailingSaveRepository {
        async fn load(&self) -> Result<Vec<Reminder>, DomainError> {
            Ok(Vec::new())
        }

        async fn save(&self, _reminders: &[Reminder]) -> Result<(), DomainError> {
            Err(DomainError::Repository("disk full".to_string()))
        }
    }

    fn time(text: &str) -> ReminderTime {
        ReminderTime::parse(text).unwrap()
    }

    #[tokio::test]
    async fn add_appends_and_persists() {
        let repo = Arc::new(InMemoryReminderRepository::new());
        let store = ReminderStore::new(repo.clone());

        let reminder = store.add("Read", time("07:30")).await.unwrap();
        assert_eq!(reminder.habit, "Read");

        let persisted = repo.load().await.unwrap();
        assert_eq!(persisted.len(), 1);
    }

    #[tokio::test]
    async fn add_allows_duplicates() {
        let repo = Arc::new(InMemoryReminderRepository::new());
        let store = ReminderStore::new(repo);

        store.add("Read", time("07:30")).await.unwrap();
        store.add("Read", time("07:30")).await.unwrap();

        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn add_rejects_empty_habit_name() {
        let repo = Arc::new(InMemoryReminderRepository::new());
        let store = ReminderStore::new(repo);

        let result = store.add("  ", time("07:30")).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn failed_save_rolls_back_memory() {
        let store = ReminderStore::new(Arc::new(FailingSaveRepository));

        let result = store.add("Read", time("07:30")).await;

        assert!(matches!(result, Err(DomainError::Repository(_))));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = Arc::new(InMemoryReminderRepository::new());
        let store = ReminderStore::new(repo);

        store.add("B", time("09:00")).await.unwrap();
        store.add("A", time("08:00")).await.unwrap();

        let habits: Vec<String> = store.list().await.iter().map(|r| r.habit.clone()).collect();
        assert_eq!(habits, vec!["B", "A"]);
    }
}
