use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::domain::upload_policy::matches_signature;
use crate::media::application::domain::{UploadLimits, UploadPolicy, UploadTarget};
use crate::media::application::ports::incoming::use_cases::{
    UploadError, UploadMediaUseCase, UploadedMedia,
};
use crate::media::application::ports::outgoing::MediaStorage;

#[derive(Clone)]
pub struct UploadMediaService {
    storage: Arc<dyn MediaStorage>,
    limits: UploadLimits,
}

impl UploadMediaService {
    pub fn new(storage: Arc<dyn MediaStorage>, limits: UploadLimits) -> Self {
        Self { storage, limits }
    }
}

#[async_trait]
impl UploadMediaUseCase for UploadMediaService {
    fn max_bytes(&self, target: UploadTarget) -> u64 {
        UploadPolicy::for_target(target, &self.limits).max_file_size_bytes
    }

    async fn execute(
        &self,
        target: UploadTarget,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<UploadedMedia, UploadError> {
        let policy = UploadPolicy::for_target(target, &self.limits);

        if !policy.allows(content_type) {
            return Err(UploadError::UnsupportedType(content_type.to_string()));
        }
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }
        let size_bytes = bytes.len() as u64;
        if size_bytes > policy.max_file_size_bytes {
            return Err(UploadError::TooLarge {
                limit_bytes: policy.max_file_size_bytes,
            });
        }
        if !matches_signature(content_type, bytes) {
            return Err(UploadError::ContentMismatch(content_type.to_string()));
        }

        let reference = self
            .storage
            .store(content_type, bytes)
            .await
            .map_err(|e| UploadError::Storage(e.to_string()))?;

        Ok(UploadedMedia {
            reference,
            content_type: content_type.to_string(),
            size_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::adapter::outgoing::DataUrlStorage;

    const PDF: &[u8] = b"%PDF-1.4\n%fake\n";

    fn service(limits: UploadLimits) -> UploadMediaService {
        UploadMediaService::new(Arc::new(DataUrlStorage), limits)
    }

    #[tokio::test]
    async fn accepted_resume_becomes_data_reference() {
        let uploaded = service(UploadLimits::default())
            .execute(UploadTarget::Resume, "application/pdf", PDF)
            .await
            .unwrap();

        assert!(uploaded.reference.starts_with("data:application/pdf;base64,"));
        assert_eq!(uploaded.size_bytes, PDF.len() as u64);
        assert_eq!(uploaded.content_type, "application/pdf");
    }

    #[tokio::test]
    async fn wrong_type_for_target_is_rejected() {
        let result = service(UploadLimits::default())
            .execute(UploadTarget::ProfileImage, "application/pdf", PDF)
            .await;

        assert_eq!(
            result,
            Err(UploadError::UnsupportedType("application/pdf".to_string()))
        );
    }

    #[tokio::test]
    async fn oversized_file_is_rejected() {
        let limits = UploadLimits {
            max_image_bytes: 4,
            max_resume_bytes: 8,
        };

        let result = service(limits)
            .execute(UploadTarget::Resume, "application/pdf", PDF)
            .await;

        assert_eq!(result, Err(UploadError::TooLarge { limit_bytes: 8 }));
    }

    #[tokio::test]
    async fn empty_and_mislabelled_files_are_rejected() {
        let svc = service(UploadLimits::default());

        assert_eq!(
            svc.execute(UploadTarget::Resume, "application/pdf", b"").await,
            Err(UploadError::Empty)
        );
        assert_eq!(
            svc.execute(UploadTarget::Resume, "application/pdf", b"<html></html>").await,
            Err(UploadError::ContentMismatch("application/pdf".to_string()))
        );
    }

    #[test]
    fn max_bytes_follows_limits() {
        let svc = service(UploadLimits::default());

        assert_eq!(svc.max_bytes(UploadTarget::ProfileImage), UploadLimits::DEFAULT_MAX_IMAGE_BYTES);
        assert_eq!(svc.max_bytes(UploadTarget::Resume), UploadLimits::DEFAULT_MAX_RESUME_BYTES);
    }
}
