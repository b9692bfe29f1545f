use async_trait::async_trait;
use std::collections::HashMap;

use super::aggregate::Habit;
use crate::shared::DomainError;

/// Habit repository trait
///
/// The backing store is a single document keyed by habit name; it is loaded
/// and persisted whole.
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Load every habit. A missing backing document is an empty store.
    async fn load(&self) -> Result<HashMap<String, Habit>, DomainError>;

    /// Persist the full habit document.
    async fn save(&self, habits: &HashMap<String, Habit>) -> Result<(), DomainError>;
}
