pub mod auth;
pub mod content;
pub mod email;
pub mod media;
