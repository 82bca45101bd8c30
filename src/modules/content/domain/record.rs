use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use super::{ContentKind, ValidationError};

/// A flat content record owned by exactly one repository.
pub trait ContentRecord:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    const KIND: ContentKind;

    /// Checks required fields and normalizes the record before it is stored.
    fn sanitize(self) -> Result<Self, ValidationError>;

    /// Built-in content served when the store has nothing to show.
    fn defaults() -> Vec<Self> {
        Vec::new()
    }

    /// Date the record is ordered by (newest first). `None` means creation time.
    fn recency(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// A record together with the identity and timestamps assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: T,
}

impl<T: ContentRecord> Stored<T> {
    /// Wraps the n-th built-in default. Ids are deterministic so the public
    /// page can key on them, timestamps are the epoch.
    pub fn builtin(index: usize, record: T) -> Self {
        Self {
            id: Uuid::from_u128(index as u128 + 1),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            record,
        }
    }

    pub fn ordering_key(&self) -> DateTime<Utc> {
        self.record.recency().unwrap_or(self.created_at)
    }
}
