use async_trait::async_trait;
use chrono::Local;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::stores::HabitStore;
use habitline_domain::shared::DomainError;

/// Complete habit command handler
///
/// Resolves "today" from the local wall clock; the store enforces the
/// once-per-day rule.
pub struct CompleteHabitCommandHandler {
    habit_store: Arc<HabitStore>,
}

impl CompleteHabitCommandHandler {
    pub fn new(habit_store: Arc<HabitStore>) -> Self {
        Self { habit_store }
    }
}

#[async_trait]
impl CommandHandler<CompleteHabitCommand> for CompleteHabitCommandHandler {
    type Result = CompleteHabitResult;

    async fn handle(&self, cmd: CompleteHabitCommand) -> Result<Self::Result, DomainError> {
        let today = Local::now().date_naive();
        info!(
            "Handling CompleteHabitCommand for habit: {} on {}",
            cmd.name, today
        );

        let streak = self.habit_store.mark_complete(&cmd.name, today).await?;

        Ok(CompleteHabitResult {
            name: cmd.name,
            streak,
        })
    }
}
