mod contact_notifier_noop;
mod content_store_local;
mod content_store_postgres;
pub mod sea_orm_entity;

pub use contact_notifier_noop::NoopContactNotifier;
pub use content_store_local::LocalContentStore;
pub use content_store_postgres::PostgresContentStore;
