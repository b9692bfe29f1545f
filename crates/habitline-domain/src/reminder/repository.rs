use async_trait::async_trait;

use super::types::Reminder;
use crate::shared::DomainError;

/// Reminder repository trait
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Load all reminders in stored order. A missing backing document is an
    /// empty list.
    async fn load(&self) -> Result<Vec<Reminder>, DomainError>;

    /// Persist the full reminder list.
    async fn save(&self, reminders: &[Reminder]) -> Result<(), DomainError>;
}
