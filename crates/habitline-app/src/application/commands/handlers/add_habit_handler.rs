use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::stores::HabitStore;
use habitline_domain::shared::DomainError;

/// Add habit command handler
pub struct AddHabitCommandHandler {
    habit_store: Arc<HabitStore>,
}

impl AddHabitCommandHandler {
    pub fn new(habit_store: Arc<HabitStore>) -> Self {
        Self { habit_store }
    }
}

#[async_trait]
impl CommandHandler<AddHabitCommand> for AddHabitCommandHandler {
    type Result = AddHabitResult;

    async fn handle(&self, cmd: AddHabitCommand) -> Result<Self::Result, DomainError> {
        info!("Handling AddHabitCommand for habit: {}", cmd.name);

        let name = self.habit_store.add(&cmd.name, cmd.difficulty).await?;

        info!("Habit added successfully: {} ({})", name, cmd.difficulty);
        Ok(AddHabitResult { name })
    }
}
