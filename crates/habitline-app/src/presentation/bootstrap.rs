use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::HabitStatsQueries;
use crate::application::services::ReminderScheduler;
use crate::application::stores::{HabitStore, ReminderStore};
use crate::presentation::state::{AppState, CommandHandlers, Queries, Services, Stores};
use habitline_domain::habit::HabitRepository;
use habitline_domain::notification::NotificationSender;
use habitline_domain::reminder::ReminderRepository;
use habitline_infrastructure::notification::ConsoleSender;
use habitline_infrastructure::persistence::{
    JsonHabitRepository, JsonReminderRepository, HABITS_FILE, REMINDERS_FILE,
};

pub async fn build_app_state(data_dir: &Path) -> Result<AppState, Box<dyn std::error::Error>> {
    let startup_started_at = Instant::now();

    let started_at = Instant::now();
    std::fs::create_dir_all(data_dir)
        .map_err(|e| format!("Failed to create data directory: {}", e))?;
    info!(
        "✓ Ensured data dir exists ({}ms)",
        started_at.elapsed().as_millis()
    );
    info!("📁 Data directory: {}", data_dir.display());

    let habit_repo =
        Arc::new(JsonHabitRepository::new(data_dir.join(HABITS_FILE))) as Arc<dyn HabitRepository>;
    let reminder_repo = Arc::new(JsonReminderRepository::new(data_dir.join(REMINDERS_FILE)))
        as Arc<dyn ReminderRepository>;

    info!("💾 Loading habit document...");
    let started_at = Instant::now();
    let habit_store = Arc::new(HabitStore::new(habit_repo));
    habit_store
        .load()
        .await
        .map_err(|e| format!("Failed to load habits: {}", e))?;
    info!(
        "✓ Loaded {} habits ({}ms)",
        habit_store.count().await,
        started_at.elapsed().as_millis()
    );

    info!("💾 Loading reminder document...");
    let started_at = Instant::now();
    let reminder_store = Arc::new(ReminderStore::new(reminder_repo));
    reminder_store
        .load()
        .await
        .map_err(|e| format!("Failed to load reminders: {}", e))?;
    info!(
        "✓ Loaded {} reminders ({}ms)",
        reminder_store.count().await,
        started_at.elapsed().as_millis()
    );

    info!("📊 Initializing reminder scheduler...");
    let started_at = Instant::now();
    let sender = Arc::new(ConsoleSender) as Arc<dyn NotificationSender>;
    let scheduler = Arc::new(ReminderScheduler::new(reminder_store.clone(), sender));
    info!(
        "✓ Scheduler initialized ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!("▶️  Starting scheduler...");
    let started_at = Instant::now();
    scheduler.start().await;
    info!(
        "✓ Scheduler started ({}ms)",
        started_at.elapsed().as_millis()
    );

    let stats_queries = Arc::new(HabitStatsQueries::new(habit_store.clone()));

    info!("🔧 Initializing command handlers...");
    let command_handlers = CommandHandlers {
        add_habit: Arc::new(AddHabitCommandHandler::new(habit_store.clone())),
        complete_habit: Arc::new(CompleteHabitCommandHandler::new(habit_store.clone())),
        add_reminder: Arc::new(AddReminderCommandHandler::new(reminder_store.clone())),
    };
    info!("✓ Command handlers initialized");

    info!(
        "✅ AppState ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        stores: Stores {
            habits: habit_store,
            reminders: reminder_store,
        },
        services: Services { scheduler },
        queries: Queries {
            stats: stats_queries,
        },
        command_handlers,
    })
}
