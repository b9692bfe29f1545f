use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::reminder_commands::*;
use crate::application::stores::ReminderStore;
use habitline_domain::reminder::ReminderTime;
use habitline_domain::shared::DomainError;

/// Add reminder command handler
pub struct AddReminderCommandHandler {
    reminder_store: Arc<ReminderStore>,
}

impl AddReminderCommandHandler {
    pub fn new(reminder_store: Arc<ReminderStore>) -> Self {
        Self { reminder_store }
    }
}

#[async_trait]
impl CommandHandler<AddReminderCommand> for AddReminderCommandHandler {
    type Result = AddReminderResult;

    async fn handle(&self, cmd: AddReminderCommand) -> Result<Self::Result, DomainError> {
        info!(
            "Handling AddReminderCommand for habit: {} at {}",
            cmd.habit, cmd.time
        );

        let time = ReminderTime::parse(&cmd.time)?;
        let reminder = self.reminder_store.add(&cmd.habit, time).await?;

        Ok(AddReminderResult {
            habit: reminder.habit,
            time: reminder.time.to_string(),
        })
    }
}
