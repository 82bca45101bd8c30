use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ContentKind, ContentRecord, FieldResultExt, ValidationError};
use crate::shared::sanitize::{required_email, required_text};

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContentRecord for ContactMessage {
    const KIND: ContentKind = ContentKind::ContactMessage;

    fn sanitize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text(&self.name).field("name")?,
            email: required_email(&self.email).field("email")?,
            message: required_text(&self.message).field("message")?,
            submitted_at: self.submitted_at,
        })
    }

    fn recency(&self) -> Option<DateTime<Utc>> {
        Some(self.submitted_at)
    }
}

/// What a visitor submits. The submission time is assigned on receipt.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn into_message(self, submitted_at: DateTime<Utc>) -> Result<ContactMessage, ValidationError> {
        ContactMessage {
            name: self.name,
            email: self.email,
            message: self.message,
            submitted_at,
        }
        .sanitize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sanitize::FieldError;

    fn submission(email: &str) -> ContactSubmission {
        ContactSubmission {
            name: "Jane".to_string(),
            email: email.to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn valid_submission_keeps_receipt_time() {
        let now = Utc::now();
        let message = submission("jane@x.com").into_message(now).unwrap();

        assert_eq!(message.name, "Jane");
        assert_eq!(message.submitted_at, now);
        assert_eq!(message.recency(), Some(now));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = submission("not-an-email").into_message(Utc::now()).unwrap_err();
        assert_eq!(err, ValidationError::new("email", FieldError::InvalidEmail));
    }

    #[test]
    fn every_field_is_required() {
        let mut s = submission("jane@x.com");
        s.message = " ".to_string();
        assert_eq!(s.into_message(Utc::now()).unwrap_err().field, "message");
    }
}
