use async_trait::async_trait;
use serde::Serialize;

use crate::media::application::domain::UploadTarget;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("File exceeds the {limit_bytes} byte limit")]
    TooLarge { limit_bytes: u64 },

    #[error("Content type '{0}' is not accepted here")]
    UnsupportedType(String),

    #[error("File content does not match '{0}'")]
    ContentMismatch(String),

    #[error("Storage failed: {0}")]
    Storage(String),
}

/// Reference to a stored upload, ready to be put in a content record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedMedia {
    pub reference: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    /// Ceiling the web layer enforces while reading the body.
    fn max_bytes(&self, target: UploadTarget) -> u64;

    async fn execute(
        &self,
        target: UploadTarget,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<UploadedMedia, UploadError>;
}
