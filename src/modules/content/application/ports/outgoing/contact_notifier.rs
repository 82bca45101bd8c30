use async_trait::async_trait;

use crate::content::domain::{ContactMessage, Stored};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Notification failed: {0}")]
    DeliveryFailed(String),
}

/// Tells the site owner a visitor left a message.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &Stored<ContactMessage>) -> Result<(), ContactNotificationError>;
}
