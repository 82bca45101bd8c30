pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;
pub use modules::email;
pub use modules::media;

use crate::auth::adapter::outgoing::{
    account_store_postgres::PostgresAccountStore, account_store_static::StaticAccountStore,
    jwt::JwtTokenService, security::Argon2Hasher,
    token_repository_memory::MemoryTokenRepository, token_repository_redis::RedisTokenRepository,
};
use crate::auth::application::ports::outgoing::{
    AccountQuery, PasswordHasher, TokenProvider, TokenRepository,
};
use crate::auth::application::use_cases::{
    authorize_admin::{AuthorizeAdminUseCase, IAuthorizeAdminUseCase},
    bootstrap_admin::BootstrapAdminUseCase,
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
};
use crate::config::{AppConfig, AuthMode, SessionStore, SmtpSettings, StoreBackend};
use crate::content::adapter::outgoing::{
    LocalContentStore, NoopContactNotifier, PostgresContentStore,
};
use crate::content::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::content::application::ports::outgoing::{ContactNotifier, ContentStore};
use crate::content::application::services::SubmitContactService;
use crate::content::application::ContentUseCases;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::services::ContactEmailNotifier;
use crate::media::adapter::outgoing::DataUrlStorage;
use crate::media::application::ports::incoming::use_cases::UploadMediaUseCase;
use crate::media::application::services::UploadMediaService;
use crate::shared::api::{custom_path_config, json_config_with_limit, json_limit_for_uploads};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config as RedisConfig, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub submit_contact: Arc<dyn SubmitContactUseCase>,
    pub login_admin: Arc<dyn ILoginAdminUseCase>,
    pub logout_admin: Arc<dyn ILogoutAdminUseCase>,
    pub authorize_admin: Arc<dyn IAuthorizeAdminUseCase>,
    pub upload_media: Arc<dyn UploadMediaUseCase>,
    pub content_store: Arc<dyn ContentStore>,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{context}: {e}"))
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str) -> io::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| startup_error("Failed to run migrations", e))?;
    info!("Database migrations applied");

    Ok(Arc::new(conn))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // deadpool-redis and lettre may both pull in rustls
    let _ = rustls::crypto::ring::default_provider().install_default();

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;

    let db = match &config.database_url {
        Some(url) if config.store == StoreBackend::Postgres || config.auth_mode == AuthMode::Database => {
            Some(connect_database(url).await?)
        }
        _ => None,
    };
    let require_db = || {
        db.clone()
            .ok_or_else(|| startup_error("Database", "DATABASE_URL is not set"))
    };

    // Content store
    let content_store: Arc<dyn ContentStore> = match &config.store {
        StoreBackend::Local { snapshot_path: Some(path) } => {
            info!(path = %path.display(), "Using local content store with snapshot");
            Arc::new(
                LocalContentStore::open(path.clone())
                    .await
                    .map_err(|e| startup_error("Failed to open content snapshot", e))?,
            )
        }
        StoreBackend::Local { snapshot_path: None } => {
            warn!("Using in-memory content store; content is lost on restart");
            Arc::new(LocalContentStore::in_memory())
        }
        StoreBackend::Postgres => {
            info!("Using postgres content store");
            Arc::new(PostgresContentStore::new(require_db()?))
        }
    };

    // Accounts
    let hasher = Arc::new(Argon2Hasher::with_params(config.argon2.clone()));
    let accounts: Arc<dyn AccountQuery> = match config.auth_mode {
        AuthMode::Static => {
            let admin = config
                .admin
                .as_ref()
                .ok_or_else(|| startup_error("Static auth", "ADMIN_USERNAME is not set"))?;
            let password_hash = hasher
                .hash_password(&admin.password)
                .await
                .map_err(|e| startup_error("Failed to hash admin password", e))?;
            info!(username = %admin.username, "Static admin account configured");
            Arc::new(StaticAccountStore::new(admin.username.clone(), password_hash))
        }
        AuthMode::Database => {
            let store = Arc::new(PostgresAccountStore::new(require_db()?));
            if let Some(admin) = &config.admin {
                let account = BootstrapAdminUseCase::new(store.clone(), store.clone(), hasher.clone())
                    .execute(&admin.username, &admin.password)
                    .await
                    .map_err(|e| startup_error("Failed to bootstrap admin", e))?;
                info!(username = %account.username, "Admin account ensured");
            }
            store
        }
    };

    // Session revocation
    let token_repository: Arc<dyn TokenRepository> = match &config.session_store {
        SessionStore::Memory => Arc::new(MemoryTokenRepository::new()),
        SessionStore::Redis { url } => {
            let pool = RedisConfig::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .map_err(|e| startup_error("Failed to create Redis pool", e))?;
            Arc::new(RedisTokenRepository::new(Arc::new(pool)))
        }
    };

    // Contact notification
    let notifier: Arc<dyn ContactNotifier> = match &config.contact_email {
        Some(settings) => {
            let sender = match &settings.smtp {
                SmtpSettings::Relay {
                    server,
                    username,
                    password,
                } => SmtpEmailSender::new(server, username, password, &settings.from)
                    .map_err(|e| startup_error("Invalid SMTP relay", e))?,
                SmtpSettings::Local { host, port } => {
                    SmtpEmailSender::new_local(host, *port, &settings.from)
                }
            };
            Arc::new(ContactEmailNotifier::new(Arc::new(sender), settings.notify.clone()))
        }
        None => {
            info!("CONTACT_NOTIFY_EMAIL not set; contact messages are stored only");
            Arc::new(NoopContactNotifier)
        }
    };

    let token_provider: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(config.jwt.clone()));

    let content = ContentUseCases::with_store(content_store.clone(), config.store_timeout);
    let submit_contact = SubmitContactService::new(content.messages.clone(), notifier);
    let login_admin = LoginAdminUseCase::new(accounts.clone(), hasher, token_provider.clone());
    let logout_admin = LogoutAdminUseCase::new(token_provider.clone(), token_repository.clone());
    let authorize_admin = AuthorizeAdminUseCase::new(accounts, token_provider, token_repository);
    let upload_media = UploadMediaService::new(Arc::new(DataUrlStorage), config.upload_limits);

    let state = web::Data::new(AppState {
        content,
        submit_contact: Arc::new(submit_contact),
        login_admin: Arc::new(login_admin),
        logout_admin: Arc::new(logout_admin),
        authorize_admin: Arc::new(authorize_admin),
        upload_media: Arc::new(upload_media),
        content_store,
    });

    let json_limit = json_limit_for_uploads(config.max_upload_bytes());
    let server_url = config.bind_address();
    info!(address = %server_url, json_limit, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config_with_limit(json_limit))
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_session_handler);
    // Uploads
    cfg.service(crate::media::adapter::incoming::web::routes::upload_media_handler);
    // Content (public, contact, admin)
    crate::content::adapter::incoming::web::configure(cfg);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
