use async_trait::async_trait;
use tracing::info;

use habitline_domain::notification::{NotificationMessage, NotificationSender};
use habitline_domain::shared::DomainError;

/// Terminal notification sink.
///
/// Rings the terminal bell and prints one line to stdout. The interactive
/// loop owns the rest of the terminal, so the line is kept short and
/// self-contained.
pub struct ConsoleSender;

#[async_trait]
impl NotificationSender for ConsoleSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        println!("\x07\n[{}] {}", message.title, message.content);
        info!(
            "🔔 Notification delivered: {} - {}",
            message.title, message.content
        );
        Ok(())
    }
}
