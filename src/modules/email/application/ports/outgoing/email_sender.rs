use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Message could not be built: {0}")]
    Build(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// A plain-text message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailError>;
}
