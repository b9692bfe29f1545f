use serde::{Deserialize, Serialize};

/// Error severity levels
///
/// Drives how the presentation layer reports a failure: `Info` and `Warning`
/// are user-input outcomes, `Error` means the system itself misbehaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Duplicate habit: {0}")]
    DuplicateHabit(String),

    #[error("Already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Invalid reminder time: {0}")]
    InvalidReminderTime(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Completing a habit twice in one day is a no-op, not a fault.
            DomainError::AlreadyCompleted(_) => ErrorSeverity::Info,

            DomainError::Validation(_)
            | DomainError::HabitNotFound(_)
            | DomainError::DuplicateHabit(_)
            | DomainError::InvalidReminderTime(_) => ErrorSeverity::Warning,

            DomainError::Repository(_)
            | DomainError::Serialization(_)
            | DomainError::Deserialization(_)
            | DomainError::Infrastructure(_) => ErrorSeverity::Error,
        }
    }

    /// Check if the error was caused by user input rather than the system
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.severity(),
            ErrorSeverity::Info | ErrorSeverity::Warning
        )
    }
}
