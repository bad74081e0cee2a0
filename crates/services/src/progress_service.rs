use std::sync::Arc;

use storage::repository::{SessionRepository, TopicRepository};
use tracker_core::model::{ProgressEntry, aggregate_progress};

use crate::error::ProgressServiceError;

/// Derives the per-topic progress report from the accumulated sessions.
///
/// Every call reads a fresh snapshot and recomputes; nothing is cached. The
/// report is an inner join: sessions whose topic no longer resolves are
/// omitted, as are topics without sessions. Entries are sorted by total
/// minutes descending, ties broken by topic name ascending.
#[derive(Clone)]
pub struct ProgressService {
    topics: Arc<dyn TopicRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(topics: Arc<dyn TopicRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { topics, sessions }
    }

    /// Compute the progress report.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if either underlying read
    /// fails; no partial report is ever returned.
    pub async fn get_progress(&self) -> Result<Vec<ProgressEntry>, ProgressServiceError> {
        let topics = self.topics.list_topics().await?;
        let sessions = self.sessions.list_sessions().await?;
        Ok(aggregate_progress(&sessions, &topics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::{
        InMemoryRepository, NewSessionRecord, NewTopicRecord, StorageError,
    };
    use tracker_core::time::fixed_now;

    fn service(repo: &InMemoryRepository) -> ProgressService {
        ProgressService::new(Arc::new(repo.clone()), Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn empty_store_yields_empty_report() {
        let repo = InMemoryRepository::new();
        let entries = service(&repo).get_progress().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn sums_and_rounds_per_topic() {
        let repo = InMemoryRepository::new();
        let topic_id = repo
            .insert_topic(NewTopicRecord::new("Math", "study").unwrap())
            .await
            .unwrap();
        repo.insert_session(NewSessionRecord::new(topic_id, 1800, fixed_now()).unwrap())
            .await
            .unwrap();
        repo.insert_session(NewSessionRecord::new(topic_id, 900, fixed_now()).unwrap())
            .await
            .unwrap();

        let entries = service(&repo).get_progress().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].topic_name, "Math");
        assert_eq!(entries[0].total_minutes, 45);
    }

    #[tokio::test]
    async fn orders_topics_by_minutes_descending() {
        let repo = InMemoryRepository::new();
        let a = repo
            .insert_topic(NewTopicRecord::new("A", "study").unwrap())
            .await
            .unwrap();
        let b = repo
            .insert_topic(NewTopicRecord::new("B", "study").unwrap())
            .await
            .unwrap();
        repo.insert_session(NewSessionRecord::new(a, 120, fixed_now()).unwrap())
            .await
            .unwrap();
        repo.insert_session(NewSessionRecord::new(b, 600, fixed_now()).unwrap())
            .await
            .unwrap();

        let entries = service(&repo).get_progress().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].topic_name.as_str(), entries[0].total_minutes), ("B", 10));
        assert_eq!((entries[1].topic_name.as_str(), entries[1].total_minutes), ("A", 2));
    }

    #[tokio::test]
    async fn repeated_reads_yield_identical_reports() {
        let repo = InMemoryRepository::new();
        let topic_id = repo
            .insert_topic(NewTopicRecord::new("Math", "study").unwrap())
            .await
            .unwrap();
        repo.insert_session(NewSessionRecord::new(topic_id, 600, fixed_now()).unwrap())
            .await
            .unwrap();

        let svc = service(&repo);
        let first = svc.get_progress().await.unwrap();
        let second = svc.get_progress().await.unwrap();
        assert_eq!(first, second);
    }

    struct FailingRepository;

    #[async_trait::async_trait]
    impl TopicRepository for FailingRepository {
        async fn insert_topic(
            &self,
            _topic: NewTopicRecord,
        ) -> Result<tracker_core::model::TopicId, StorageError> {
            Err(StorageError::Connection("down".into()))
        }

        async fn get_topic(
            &self,
            _id: tracker_core::model::TopicId,
        ) -> Result<Option<tracker_core::model::Topic>, StorageError> {
            Err(StorageError::Connection("down".into()))
        }

        async fn list_topics(&self) -> Result<Vec<tracker_core::model::Topic>, StorageError> {
            Err(StorageError::Connection("down".into()))
        }

        async fn delete_all_topics(&self) -> Result<(), StorageError> {
            Err(StorageError::Connection("down".into()))
        }
    }

    #[tokio::test]
    async fn storage_failure_fails_the_whole_report() {
        let repo = InMemoryRepository::new();
        let svc = ProgressService::new(Arc::new(FailingRepository), Arc::new(repo));

        let err = svc.get_progress().await.unwrap_err();
        assert!(matches!(err, ProgressServiceError::Storage(_)));
    }
}
