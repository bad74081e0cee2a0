use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use tracker_core::model::{Session, SessionError, SessionId, Topic, TopicError, TopicId};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Insert shape for a topic, before storage assigns an id.
#[derive(Debug, Clone)]
pub struct NewTopicRecord {
    pub name: String,
    pub kind: String,
}

impl NewTopicRecord {
    /// Build a validated insert record. The name is trimmed before the
    /// non-empty check so whitespace-only names are rejected.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyName` if `name` is empty after trimming.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Result<Self, TopicError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TopicError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            kind: kind.into(),
        })
    }
}

/// Insert shape for a session, before storage assigns an id.
#[derive(Debug, Clone)]
pub struct NewSessionRecord {
    pub topic_id: TopicId,
    pub duration_seconds: i64,
    pub completed_at: DateTime<Utc>,
}

impl NewSessionRecord {
    /// Build a validated insert record.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NonPositiveDuration` if `duration_seconds <= 0`.
    pub fn new(
        topic_id: TopicId,
        duration_seconds: i64,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if duration_seconds <= 0 {
            return Err(SessionError::NonPositiveDuration);
        }
        Ok(Self {
            topic_id,
            duration_seconds,
            completed_at,
        })
    }
}

/// Repository contract for topics.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Persist a new topic and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the topic cannot be stored.
    async fn insert_topic(&self, topic: NewTopicRecord) -> Result<TopicId, StorageError>;

    /// Fetch a topic by id. Returns `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn get_topic(&self, id: TopicId) -> Result<Option<Topic>, StorageError>;

    /// List all topics in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError>;

    /// Delete every topic. Development-only reset path.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn delete_all_topics(&self) -> Result<(), StorageError>;
}

/// Repository contract for sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn insert_session(&self, session: NewSessionRecord) -> Result<SessionId, StorageError>;

    /// List all sessions in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn list_sessions(&self) -> Result<Vec<Session>, StorageError>;

    /// Delete every session. Development-only reset path.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn delete_all_sessions(&self) -> Result<(), StorageError>;
}

#[derive(Default)]
struct InMemoryState {
    topics: Vec<Topic>,
    sessions: Vec<Session>,
    next_topic_id: i64,
    next_session_id: i64,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TopicRepository for InMemoryRepository {
    async fn insert_topic(&self, topic: NewTopicRecord) -> Result<TopicId, StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.next_topic_id += 1;
        let id = TopicId::new(guard.next_topic_id);
        let stored = Topic::from_persisted(id, topic.name, topic.kind)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        guard.topics.push(stored);
        Ok(id)
    }

    async fn get_topic(&self, id: TopicId) -> Result<Option<Topic>, StorageError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.topics.iter().find(|t| t.id() == id).cloned())
    }

    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.topics.clone())
    }

    async fn delete_all_topics(&self) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.topics.clear();
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn insert_session(&self, session: NewSessionRecord) -> Result<SessionId, StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.next_session_id += 1;
        let id = SessionId::new(guard.next_session_id);
        let stored = Session::from_persisted(
            id,
            session.topic_id,
            session.duration_seconds,
            session.completed_at,
        )
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
        guard.sessions.push(stored);
        Ok(id)
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, StorageError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.sessions.clone())
    }

    async fn delete_all_sessions(&self) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.sessions.clear();
        Ok(())
    }
}

/// Aggregates topic and session repositories behind trait objects for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub topics: Arc<dyn TopicRepository>,
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let topics: Arc<dyn TopicRepository> = Arc::new(repo.clone());
        let sessions: Arc<dyn SessionRepository> = Arc::new(repo);
        Self { topics, sessions }
    }
}
