use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Notification message to be delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message title
    pub title: String,
    /// Message content/body
    pub content: String,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The message a due reminder produces.
    pub fn reminder(habit: &str) -> Self {
        Self::new(
            "Reminder",
            format!("Don't forget to complete your habit: {}", habit),
        )
    }
}

/// Notification sender trait
/// The poller depends on this, not on a concrete sink
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a notification message
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
}
