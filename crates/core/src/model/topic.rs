use serde::Serialize;
use thiserror::Error;

use crate::model::ids::TopicId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic name cannot be empty")]
    EmptyName,
}

/// A named category against which time is tracked.
///
/// Topics are immutable once created and are never deleted; sessions reference
/// them by id. `kind` is the free-form category label clients send as `type`
/// ("work", "study", ...); no enumeration is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    id: TopicId,
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

impl Topic {
    /// Rehydrate a topic from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyName` if `name` is empty after trimming.
    pub fn from_persisted(
        id: TopicId,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<Self, TopicError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TopicError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            kind: kind.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> TopicId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}
