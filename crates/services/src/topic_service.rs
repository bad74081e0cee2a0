use std::sync::Arc;

use storage::repository::{NewTopicRecord, TopicRepository};
use tracker_core::model::{Topic, TopicId};

use crate::error::TopicServiceError;

/// Owns topic identity and naming: the registry topics are created through
/// and sessions are validated against.
#[derive(Clone)]
pub struct TopicService {
    topics: Arc<dyn TopicRepository>,
}

impl TopicService {
    #[must_use]
    pub fn new(topics: Arc<dyn TopicRepository>) -> Self {
        Self { topics }
    }

    /// Create a new topic and persist it, returning the stored topic with its
    /// assigned id. Duplicate names are permitted.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Topic` if the name is empty after trimming.
    /// Returns `TopicServiceError::Storage` if persistence fails.
    pub async fn create_topic(
        &self,
        name: String,
        kind: String,
    ) -> Result<Topic, TopicServiceError> {
        let record = NewTopicRecord::new(name, kind)?;
        let name = record.name.clone();
        let kind = record.kind.clone();
        let id = self.topics.insert_topic(record).await?;
        let topic = Topic::from_persisted(id, name, kind)?;
        Ok(topic)
    }

    /// List all topics in creation order.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Storage` if repository access fails.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, TopicServiceError> {
        let topics = self.topics.list_topics().await?;
        Ok(topics)
    }

    /// Fetch a topic by id. Returns `Ok(None)` when the topic does not exist.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Storage` if repository access fails.
    pub async fn get_topic(&self, id: TopicId) -> Result<Option<Topic>, TopicServiceError> {
        let topic = self.topics.get_topic(id).await?;
        Ok(topic)
    }
}
