// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod habit;
pub mod notification;
pub mod reminder;
pub mod shared;

// Re-exports for convenience
pub use shared::{DomainError, ErrorSeverity};
