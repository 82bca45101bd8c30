use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ContentKind, ContentRecord, FieldResultExt, ValidationError};
use crate::media::application::domain::UploadPolicy;
use crate::shared::sanitize::required_reference;

/// Where the downloadable resume lives: a URL or an embedded PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResumeLink {
    pub url: String,
}

impl ContentRecord for ResumeLink {
    const KIND: ContentKind = ContentKind::ResumeLink;

    fn sanitize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            url: required_reference(&self.url, UploadPolicy::RESUME_MIME_TYPES).field("url")?,
        })
    }
}
