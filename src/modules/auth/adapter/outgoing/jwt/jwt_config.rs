#[derive(Debug, Clone, PartialEq)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;
    pub const MAX_ACCESS_EXPIRY: i64 = 86400;
    pub const DEFAULT_ACCESS_EXPIRY: i64 = 3600;
    pub const DEFAULT_ISSUER: &'static str = "portfolio-cms";
}
