use crate::domain::entities::report::ReportMessage;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Send capability for the composed report. One dispatch attempt per run;
/// retries are the external scheduler's job.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Fails with `DomainError::Delivery` carrying the provider's status and
    /// response on a non-2xx outcome.
    async fn send(&self, message: &ReportMessage) -> Result<(), DomainError>;
}
