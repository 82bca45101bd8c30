pub mod api;
pub mod sanitize;
