use tracker_core::model::{Session, SessionId};

use super::SqliteRepository;
use super::mapping::map_session_row;
use crate::repository::{NewSessionRecord, SessionRepository, StorageError};

#[async_trait::async_trait]
impl SessionRepository for SqliteRepository {
    async fn insert_session(&self, session: NewSessionRecord) -> Result<SessionId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO sessions (topic_id, duration_seconds, completed_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(session.topic_id.value())
        .bind(session.duration_seconds)
        .bind(session.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(SessionId::new(res.last_insert_rowid()))
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, topic_id, duration_seconds, completed_at
            FROM sessions
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in rows {
            sessions.push(map_session_row(&row)?);
        }
        Ok(sessions)
    }

    async fn delete_all_sessions(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM sessions")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
