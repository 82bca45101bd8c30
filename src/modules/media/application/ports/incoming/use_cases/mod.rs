mod upload_media;

pub use upload_media::{UploadError, UploadMediaUseCase, UploadedMedia};
