mod poller;

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::application::stores::ReminderStore;
use habitline_domain::notification::NotificationSender;

/// Periodic reminder poller with an explicit lifecycle.
///
/// One background task polls the reminder store once a minute and fires a
/// notification for every reminder whose time matches the current minute.
/// The task reads the live store each tick, so reminders added while running
/// are picked up without a reload.
pub struct ReminderScheduler {
    reminder_store: Arc<ReminderStore>,
    sender: Arc<dyn NotificationSender>,
    /// Poller task handle
    /// Using Mutex to allow start/stop from multiple contexts
    poll_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ReminderScheduler {
    pub fn new(reminder_store: Arc<ReminderStore>, sender: Arc<dyn NotificationSender>) -> Self {
        Self {
            reminder_store,
            sender,
            poll_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Spawn the poll task. A second call replaces the running task.
    pub async fn start(&self) {
        let handle = tokio::spawn(poller::run(
            self.reminder_store.clone(),
            self.sender.clone(),
        ));

        let mut slot = self.poll_handle.lock().await;
        if let Some(old_handle) = slot.replace(handle) {
            warn!("⚠️  Aborting previous reminder poller");
            old_handle.abort();
        }

        info!(
            "✅ Reminder scheduler started ({}s tokio interval)",
            poller::POLL_INTERVAL.as_secs()
        );
    }

    /// Abort the poll task. A stopped scheduler fires nothing.
    pub async fn stop(&self) {
        let mut slot = self.poll_handle.lock().await;
        if let Some(handle) = slot.take() {
            handle.abort();
            info!("🛑 Reminder poller stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let slot = self.poll_handle.lock().await;
        slot.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub async fn shutdown(&self) {
        info!("🛑 Shutting down reminder scheduler");
        self.stop().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use habitline_domain::notification::NotificationMessage;
    use habitline_domain::reminder::{Reminder, ReminderRepository};
    use habitline_domain::shared::DomainError;

    struct EmptyReminderRepository;

    #[async_trait]
    impl ReminderRepository for EmptyReminderRepository {
        async fn load(&self) -> Result<Vec<Reminder>, DomainError> {
            Ok(Vec::new())
        }

        async fn save(&self, _reminders: &[Reminder]) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct NullSender;

    #[async_trait]
    impl NotificationSender for NullSender {
        async fn send(&self, _message: &NotificationMessage) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn scheduler() -> ReminderScheduler {
        let store = Arc::new(ReminderStore::new(Arc::new(EmptyReminderRepository)));
        ReminderScheduler::new(store, Arc::new(NullSender))
    }

    #[tokio::test]
    async fn start_and_stop_lifecycle() {
        let scheduler = scheduler();
        assert!(!scheduler.is_running().await);

        scheduler.start().await;
        assert!(scheduler.is_running().await);

        scheduler.stop().await;
        assert!(!scheduler.is_running().await);
    }

    #[tokio::test]
    async fn stop_without_start_is_a_no_op() {
        let scheduler = scheduler();
        scheduler.stop().await;
        assert!(!scheduler.is_running().await);
    }

    #[tokio::test]
    async fn start_twice_replaces_the_poller() {
        let scheduler = scheduler();
        scheduler.start().await;
        scheduler.start().await;
        assert!(scheduler.is_running().await);

        scheduler.shutdown().await;
        assert!(!scheduler.is_running().await);
    }
}
