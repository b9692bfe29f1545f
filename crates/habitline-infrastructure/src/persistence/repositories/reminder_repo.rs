use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;

use habitline_domain::reminder::{Reminder, ReminderRepository};
use habitline_domain::shared::DomainError;

/// Reminder repository backed by a single JSON array document.
///
/// `Reminder`'s serde form already matches the wire schema exactly
/// (`{"habit": ..., "time": "HH:MM"}`), and the strict `ReminderTime`
/// deserializer rejects malformed times on load, so the list round-trips
/// without an intermediate record type.
pub struct JsonReminderRepository {
    path: PathBuf,
}

impl JsonReminderRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReminderRepository for JsonReminderRepository {
    async fn load(&self) -> Result<Vec<Reminder>, DomainError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "[reminders] no document at {}, starting empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(DomainError::Repository(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let reminders: Vec<Reminder> = serde_json::from_str(&content).map_err(|e| {
            DomainError::Deserialization(format!(
                "Malformed reminder document {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(
            "[reminders] loaded {} entries from {}",
            reminders.len(),
            self.path.display()
        );
        Ok(reminders)
    }

    async fn save(&self, reminders: &[Reminder]) -> Result<(), DomainError> {
        let content = serde_json::to_string_pretty(reminders).map_err(|e| {
            DomainError::Serialization(format!("Failed to encode reminder document: {}", e))
        })?;

        tokio::fs::write(&self.path, content).await.map_err(|e| {
            DomainError::Repository(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(
            "[reminders] saved {} entries to {}",
            reminders.len(),
            self.path.display()
        );
        Ok(())
    }
}
