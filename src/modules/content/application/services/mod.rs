mod content_service;
mod submit_contact_service;

pub use content_service::ContentService;
pub use submit_contact_service::SubmitContactService;
