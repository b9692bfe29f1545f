use std::sync::Arc;

use chrono::{Local, NaiveTime};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info};

use crate::application::stores::ReminderStore;
use habitline_domain::notification::{NotificationMessage, NotificationSender};
use habitline_domain::reminder::Reminder;

pub(super) const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Poll loop. The first tick fires immediately (check-on-startup), then the
/// interval settles at one tick per minute.
pub(super) async fn run(reminder_store: Arc<ReminderStore>, sender: Arc<dyn NotificationSender>) {
    let mut ticker = interval(POLL_INTERVAL);
    // A late tick runs late and the next one is scheduled from there; missed
    // minutes are not replayed.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        run_tick(&reminder_store, sender.as_ref()).await;
    }
}

async fn run_tick(reminder_store: &ReminderStore, sender: &dyn NotificationSender) {
    let now = Local::now().time();
    let reminders = reminder_store.list().await;
    let due = due_reminders(&reminders, now);

    if !due.is_empty() {
        dispatch(&due, sender).await;
    }
}

/// Reminders whose stored minute contains `now`. At most one poll tick can
/// land in any given minute, so a match fires at most once per day.
fn due_reminders(reminders: &[Reminder], now: NaiveTime) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| r.time.matches(now))
        .cloned()
        .collect()
}

async fn dispatch(due: &[Reminder], sender: &dyn NotificationSender) {
    for reminder in due {
        info!(
            "⏰ Reminder due for '{}' at {}",
            reminder.habit, reminder.time
        );

        let message = NotificationMessage::reminder(&reminder.habit);
        if let Err(e) = sender.send(&message).await {
            error!(
                "❌ Failed to deliver reminder for '{}': {}",
                reminder.habit, e
            );
        }
    }
}
