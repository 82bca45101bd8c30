use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use argon2::Params;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::media::application::domain::UploadLimits;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    fn invalid(key: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// In-process store, optionally snapshotted to a JSON file.
    Local { snapshot_path: Option<PathBuf> },
    Postgres,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// A single admin pair from the environment.
    Static,
    /// Accounts and roles in `admin_users` / `user_roles`.
    Database,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionStore {
    Memory,
    Redis { url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SmtpSettings {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local relay such as Mailpit.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactEmailSettings {
    pub smtp: SmtpSettings,
    pub from: String,
    pub notify: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub store_timeout: Duration,
    pub auth_mode: AuthMode,
    pub admin: Option<AdminCredentials>,
    pub session_store: SessionStore,
    pub jwt: JwtConfig,
    pub argon2: Params,
    pub contact_email: Option<ContactEmailSettings>,
    pub upload_limits: UploadLimits,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;
    pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 4 * 1024;
    pub const DEFAULT_ARGON2_ITERATIONS: u32 = 3;
    pub const DEFAULT_ARGON2_PARALLELISM: u32 = 1;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::Missing(key.to_string()));

        let host = get("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = parse_or(&get, "PORT", Self::DEFAULT_PORT)?;

        let store = match get("CONTENT_STORE").as_deref().unwrap_or("local") {
            "local" => StoreBackend::Local {
                snapshot_path: get("CONTENT_SNAPSHOT_PATH").map(PathBuf::from),
            },
            "postgres" => StoreBackend::Postgres,
            other => {
                return Err(ConfigError::invalid(
                    "CONTENT_STORE",
                    format!("expected 'local' or 'postgres', got '{other}'"),
                ))
            }
        };

        let store_timeout_ms: u64 =
            parse_or(&get, "STORE_TIMEOUT_MS", Self::DEFAULT_STORE_TIMEOUT_MS)?;
        if store_timeout_ms == 0 {
            return Err(ConfigError::invalid("STORE_TIMEOUT_MS", "must be positive"));
        }

        let auth_mode = match get("AUTH_MODE").as_deref().unwrap_or("static") {
            "static" => AuthMode::Static,
            "database" => AuthMode::Database,
            other => {
                return Err(ConfigError::invalid(
                    "AUTH_MODE",
                    format!("expected 'static' or 'database', got '{other}'"),
                ))
            }
        };

        let admin = match (get("ADMIN_USERNAME"), get("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminCredentials { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD".into())),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_USERNAME".into())),
        };
        if auth_mode == AuthMode::Static && admin.is_none() {
            return Err(ConfigError::Missing("ADMIN_USERNAME".into()));
        }

        let database_url = get("DATABASE_URL");
        let needs_database = store == StoreBackend::Postgres || auth_mode == AuthMode::Database;
        if needs_database && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL".into()));
        }

        let session_store = match get("SESSION_STORE").as_deref().unwrap_or("memory") {
            "memory" => SessionStore::Memory,
            "redis" => SessionStore::Redis {
                url: require("REDIS_URL")?,
            },
            other => {
                return Err(ConfigError::invalid(
                    "SESSION_STORE",
                    format!("expected 'memory' or 'redis', got '{other}'"),
                ))
            }
        };

        let jwt = jwt_config(&get)?;
        let argon2 = argon2_params(&get)?;
        let contact_email = contact_email_settings(&get)?;

        let upload_limits = UploadLimits {
            max_image_bytes: parse_or(
                &get,
                "UPLOAD_MAX_IMAGE_BYTES",
                UploadLimits::DEFAULT_MAX_IMAGE_BYTES,
            )?,
            max_resume_bytes: parse_or(
                &get,
                "UPLOAD_MAX_RESUME_BYTES",
                UploadLimits::DEFAULT_MAX_RESUME_BYTES,
            )?,
        };

        Ok(Self {
            host,
            port,
            store,
            database_url,
            store_timeout: Duration::from_millis(store_timeout_ms),
            auth_mode,
            admin,
            session_store,
            jwt,
            argon2,
            contact_email,
            upload_limits,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Largest request body any route accepts.
    pub fn max_upload_bytes(&self) -> u64 {
        self.upload_limits
            .max_image_bytes
            .max(self.upload_limits.max_resume_bytes)
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string())),
        None => Ok(default),
    }
}

fn jwt_config(get: &impl Fn(&str) -> Option<String>) -> Result<JwtConfig, ConfigError> {
    let secret_key = get("JWT_SECRET").ok_or_else(|| ConfigError::Missing("JWT_SECRET".into()))?;
    if secret_key.len() < JwtConfig::MIN_SECRET_LEN {
        return Err(ConfigError::invalid(
            "JWT_SECRET",
            format!("must be at least {} characters", JwtConfig::MIN_SECRET_LEN),
        ));
    }

    let access_token_expiry = parse_or(get, "JWT_ACCESS_EXPIRY", JwtConfig::DEFAULT_ACCESS_EXPIRY)?;
    if !(1..=JwtConfig::MAX_ACCESS_EXPIRY).contains(&access_token_expiry) {
        return Err(ConfigError::invalid(
            "JWT_ACCESS_EXPIRY",
            format!("must be between 1 and {} seconds", JwtConfig::MAX_ACCESS_EXPIRY),
        ));
    }

    Ok(JwtConfig {
        secret_key,
        issuer: get("JWT_ISSUER").unwrap_or_else(|| JwtConfig::DEFAULT_ISSUER.to_string()),
        access_token_expiry,
    })
}

fn argon2_params(get: &impl Fn(&str) -> Option<String>) -> Result<Params, ConfigError> {
    let memory = parse_or(get, "ARGON2_MEMORY_KIB", AppConfig::DEFAULT_ARGON2_MEMORY_KIB)?;
    let iterations = parse_or(get, "ARGON2_ITERATIONS", AppConfig::DEFAULT_ARGON2_ITERATIONS)?;
    let parallelism = parse_or(get, "ARGON2_PARALLELISM", AppConfig::DEFAULT_ARGON2_PARALLELISM)?;

    Params::new(memory, iterations, parallelism, None)
        .map_err(|e| ConfigError::invalid("ARGON2_*", e.to_string()))
}

/// Notification is on only when a recipient is configured.
fn contact_email_settings(
    get: &impl Fn(&str) -> Option<String>,
) -> Result<Option<ContactEmailSettings>, ConfigError> {
    let Some(notify) = get("CONTACT_NOTIFY_EMAIL") else {
        return Ok(None);
    };
    let require = |key: &str| get(key).ok_or_else(|| ConfigError::Missing(key.to_string()));

    let smtp = match get("SMTP_SERVER") {
        Some(server) => SmtpSettings::Relay {
            server,
            username: require("SMTP_USERNAME")?,
            password: require("SMTP_PASSWORD")?,
        },
        None => SmtpSettings::Local {
            host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(get, "SMTP_PORT", 1025)?,
        },
    };

    Ok(Some(ContactEmailSettings {
        smtp,
        from: require("EMAIL_FROM")?,
        notify,
    }))
}
