use habitline_domain::habit::Difficulty;

use crate::application::commands::command_handler::Command;

/// Add habit command
#[derive(Debug, Clone)]
pub struct AddHabitCommand {
    pub name: String,
    pub difficulty: Difficulty,
}

impl Command for AddHabitCommand {}

/// Add habit command result
#[derive(Debug, Clone)]
pub struct AddHabitResult {
    pub name: String,
}

/// Complete habit command
///
/// The completion date is resolved by the handler (local wall clock), not
/// supplied by the caller.
#[derive(Debug, Clone)]
pub struct CompleteHabitCommand {
    pub name: String,
}

impl Command for CompleteHabitCommand {}

/// Complete habit command result
#[derive(Debug, Clone)]
pub struct CompleteHabitResult {
    pub name: String,
    pub streak: u32,
}
