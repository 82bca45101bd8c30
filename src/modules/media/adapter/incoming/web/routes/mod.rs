mod upload_media;

pub use upload_media::{__path_upload_media_handler, upload_media_handler, UploadResponse};
