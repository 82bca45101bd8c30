mod json_config;
mod path_config;
mod response;

pub use json_config::{custom_json_config, json_config_with_limit, json_limit_for_uploads};
pub use path_config::custom_path_config;
pub use response::{ApiError, ApiResponse};
