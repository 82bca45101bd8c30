use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::content::{
    application::ports::{
        incoming::use_cases::{ContentError, ManageContent, SubmitContactError, SubmitContactUseCase},
        outgoing::ContactNotifier,
    },
    domain::{ContactMessage, ContactSubmission, Stored},
};

/// Stores a visitor's message and lets the owner know about it.
#[derive(Clone)]
pub struct SubmitContactService {
    messages: Arc<dyn ManageContent<ContactMessage>>,
    notifier: Arc<dyn ContactNotifier>,
}

impl SubmitContactService {
    pub fn new(
        messages: Arc<dyn ManageContent<ContactMessage>>,
        notifier: Arc<dyn ContactNotifier>,
    ) -> Self {
        Self { messages, notifier }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<Stored<ContactMessage>, SubmitContactError> {
        let message = submission.into_message(Utc::now())?;

        let stored = self.messages.create(message).await.map_err(|e| match e {
            ContentError::Validation(v) => SubmitContactError::Validation(v),
            other => SubmitContactError::StoreUnavailable(other.to_string()),
        })?;

        info!(id = %stored.id, "Contact message received");

        // The visitor's message is already stored; a failed notification only gets logged.
        if let Err(e) = self.notifier.notify(&stored).await {
            warn!(id = %stored.id, error = %e, "Contact notification failed");
        }

        Ok(stored)
    }
}
