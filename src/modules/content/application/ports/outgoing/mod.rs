mod contact_notifier;
mod content_store;

pub use contact_notifier::{ContactNotificationError, ContactNotifier};
pub use content_store::{ContentStore, ContentStoreError, StoredDocument};
