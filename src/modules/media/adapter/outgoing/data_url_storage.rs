use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::media::application::ports::outgoing::{MediaStorage, MediaStorageError};

/// Embeds the file in the reference itself as a `data:` URL, so the content
/// record carries the file and no separate blob store is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlStorage;

#[async_trait]
impl MediaStorage for DataUrlStorage {
    async fn store(&self, content_type: &str, bytes: &[u8]) -> Result<String, MediaStorageError> {
        Ok(format!("data:{};base64,{}", content_type, STANDARD.encode(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::domain::UploadPolicy;
    use crate::shared::sanitize::required_reference;

    #[tokio::test]
    async fn produces_reference_accepted_by_content_records() {
        let reference = DataUrlStorage.store("application/pdf", b"%PDF-1.4").await.unwrap();

        assert_eq!(reference, "data:application/pdf;base64,JVBERi0xLjQ=");
        assert!(required_reference(&reference, UploadPolicy::RESUME_MIME_TYPES).is_ok());
    }

    #[tokio::test]
    async fn image_reference_passes_profile_image_check() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let reference = DataUrlStorage.store("image/png", &png).await.unwrap();

        assert!(required_reference(&reference, UploadPolicy::IMAGE_MIME_TYPES).is_ok());
    }
}
