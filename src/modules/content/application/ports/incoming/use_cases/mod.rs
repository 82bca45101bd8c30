mod manage_content;
mod submit_contact;

pub use manage_content::{ContentError, ManageContent};
pub use submit_contact::{SubmitContactError, SubmitContactUseCase};
