use std::sync::Arc;

use storage::repository::{NewSessionRecord, SessionRepository, TopicRepository};
use tracker_core::model::{Session, SessionError, TopicId};

use crate::Clock;
use crate::error::SessionServiceError;

/// Validates and persists completed tracking sessions against a topic.
///
/// The topic-existence lookup happens synchronously before the insert; it is
/// the integrity gate that keeps every persisted session pointing at a real
/// topic. There is no update or cancellation path once a session is written.
#[derive(Clone)]
pub struct SessionService {
    clock: Clock,
    topics: Arc<dyn TopicRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl SessionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        topics: Arc<dyn TopicRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            clock,
            topics,
            sessions,
        }
    }

    /// Record a completed session. `topic_id` arrives as the raw string the
    /// client sent; `completed_at` is stamped from the clock at persistence
    /// time, never taken from the caller.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Session` if the duration is not positive.
    /// Returns `SessionServiceError::MalformedTopicId` if the id does not parse.
    /// Returns `SessionServiceError::TopicNotFound` if no such topic exists.
    /// Returns `SessionServiceError::Storage` if persistence fails.
    pub async fn record_session(
        &self,
        topic_id: &str,
        duration_seconds: i64,
    ) -> Result<Session, SessionServiceError> {
        if duration_seconds <= 0 {
            return Err(SessionError::NonPositiveDuration.into());
        }
        let topic_id: TopicId = topic_id
            .parse()
            .map_err(|_| SessionServiceError::MalformedTopicId)?;

        self.topics
            .get_topic(topic_id)
            .await?
            .ok_or(SessionServiceError::TopicNotFound)?;

        let completed_at = self.clock.now();
        let record = NewSessionRecord::new(topic_id, duration_seconds, completed_at)?;
        let id = self.sessions.insert_session(record).await?;

        let session = Session::from_persisted(id, topic_id, duration_seconds, completed_at)?;
        Ok(session)
    }
}
