use async_trait::async_trait;

use crate::content::domain::{ContactMessage, ContactSubmission, Stored, ValidationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Content store unavailable: {0}")]
    StoreUnavailable(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<Stored<ContactMessage>, SubmitContactError>;
}
