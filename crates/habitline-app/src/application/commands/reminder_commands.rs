use crate::application::commands::command_handler::Command;

/// Add reminder command
///
/// `time` is the raw user input; the handler parses it into a `ReminderTime`
/// and rejects anything that is not strict zero-padded `HH:MM`.
#[derive(Debug, Clone)]
pub struct AddReminderCommand {
    pub habit: String,
    pub time: String,
}

impl Command for AddReminderCommand {}

/// Add reminder command result
#[derive(Debug, Clone)]
pub struct AddReminderResult {
    pub habit: String,
    pub time: String,
}
