use crate::shared::sanitize::FieldError;

/// A required field is missing or a field is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: FieldError,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: FieldError) -> Self {
        Self { field, reason }
    }
}

/// Attaches the field name to a sanitizer result.
pub trait FieldResultExt<T> {
    fn field(self, name: &'static str) -> Result<T, ValidationError>;
}

impl<T> FieldResultExt<T> for Result<T, FieldError> {
    fn field(self, name: &'static str) -> Result<T, ValidationError> {
        self.map_err(|reason| ValidationError::new(name, reason))
    }
}
