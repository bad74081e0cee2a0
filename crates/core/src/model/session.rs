use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{SessionId, TopicId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("duration must be positive")]
    NonPositiveDuration,
}

/// One immutable record of time spent on a topic.
///
/// `completed_at` is assigned by the recorder at persistence time, never by the
/// client. Sessions are never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    topic_id: TopicId,
    duration_seconds: i64,
    completed_at: DateTime<Utc>,
}

impl Session {
    /// Rehydrate a session from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NonPositiveDuration` if `duration_seconds <= 0`.
    pub fn from_persisted(
        id: SessionId,
        topic_id: TopicId,
        duration_seconds: i64,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if duration_seconds <= 0 {
            return Err(SessionError::NonPositiveDuration);
        }
        Ok(Self {
            id,
            topic_id,
            duration_seconds,
            completed_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
