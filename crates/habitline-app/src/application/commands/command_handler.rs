use async_trait::async_trait;
use habitline_domain::shared::DomainError;

/// Marker trait for command structs.
pub trait Command: Send + Sync {}

/// One handler per command type; the result type is handler-specific.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    type Result;

    async fn handle(&self, command: C) -> Result<Self::Result, DomainError>;
}
