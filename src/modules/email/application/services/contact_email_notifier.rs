use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::content::application::ports::outgoing::{ContactNotificationError, ContactNotifier};
use crate::content::domain::{ContactMessage, Stored};
use crate::email::application::ports::outgoing::{EmailSender, OutgoingEmail};

/// E-mails each new contact message to the site owner.
#[derive(Clone)]
pub struct ContactEmailNotifier {
    sender: Arc<dyn EmailSender>,
    recipient: String,
}

impl fmt::Debug for ContactEmailNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl ContactEmailNotifier {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
        }
    }

    fn compose(&self, stored: &Stored<ContactMessage>) -> OutgoingEmail {
        let message = &stored.record;
        OutgoingEmail {
            to: self.recipient.clone(),
            subject: format!("New contact message from {}", message.name),
            body: format!(
                "From: {} <{}>\nReceived: {}\n\n{}\n",
                message.name,
                message.email,
                message.submitted_at.to_rfc3339(),
                message.message
            ),
            reply_to: Some(message.email.clone()),
        }
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailNotifier {
    async fn notify(&self, message: &Stored<ContactMessage>) -> Result<(), ContactNotificationError> {
        self.sender
            .send_email(self.compose(message))
            .await
            .map_err(|e| ContactNotificationError::DeliveryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::application::ports::outgoing::EmailError;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailError>;
        }
    }

    fn stored_message() -> Stored<ContactMessage> {
        let now = Utc::now();
        Stored {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            record: ContactMessage {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                message: "Hello".to_string(),
                submitted_at: now,
            },
        }
    }

    #[tokio::test]
    async fn sends_message_to_owner_with_reply_to_visitor() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .withf(|email| {
                email.to == "owner@example.com"
                    && email.subject == "New contact message from Jane"
                    && email.body.contains("Hello")
                    && email.reply_to.as_deref() == Some("jane@x.com")
            })
            .times(1)
            .returning(|_| Ok(()));

        let notifier = ContactEmailNotifier::new(Arc::new(sender), "owner@example.com");

        assert!(notifier.notify(&stored_message()).await.is_ok());
    }

    #[tokio::test]
    async fn delivery_failure_is_reported() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .returning(|_| Err(EmailError::Transport("timeout".to_string())));

        let notifier = ContactEmailNotifier::new(Arc::new(sender), "owner@example.com");
        let result = notifier.notify(&stored_message()).await;

        assert!(matches!(result, Err(ContactNotificationError::DeliveryFailed(msg)) if msg.contains("timeout")));
    }

    #[test]
    fn debug_hides_sender() {
        let notifier = ContactEmailNotifier::new(Arc::new(MockEmailSenderMock::new()), "owner@example.com");

        assert_eq!(
            format!("{:?}", notifier),
            "ContactEmailNotifier { sender: \"<dyn EmailSender>\", recipient: \"owner@example.com\" }"
        );
    }
}
