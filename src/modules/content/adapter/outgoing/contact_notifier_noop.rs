use async_trait::async_trait;

use crate::content::{
    application::ports::outgoing::{ContactNotificationError, ContactNotifier},
    domain::{ContactMessage, Stored},
};

/// Used when no mail transport is configured.
#[derive(Debug, Clone, Default)]
pub struct NoopContactNotifier;

#[async_trait]
impl ContactNotifier for NoopContactNotifier {
    async fn notify(&self, _message: &Stored<ContactMessage>) -> Result<(), ContactNotificationError> {
        Ok(())
    }
}
