use std::path::Path;
use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::HabitStatsQueries;
use crate::application::services::ReminderScheduler;
use crate::application::stores::{HabitStore, ReminderStore};

pub struct Stores {
    pub habits: Arc<HabitStore>,
    pub reminders: Arc<ReminderStore>,
}

pub struct Services {
    pub scheduler: Arc<ReminderScheduler>,
}

pub struct Queries {
    pub stats: Arc<HabitStatsQueries>,
}

/// Command handlers container
pub struct CommandHandlers {
    pub add_habit: Arc<AddHabitCommandHandler>,
    pub complete_habit: Arc<CompleteHabitCommandHandler>,
    pub add_reminder: Arc<AddReminderCommandHandler>,
}

pub struct AppState {
    pub stores: Stores,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    pub async fn new(data_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        crate::presentation::bootstrap::build_app_state(data_dir).await
    }
}
