use sqlx::Row;
use tracker_core::model::{Session, SessionId, Topic, TopicId};

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn map_topic_row(row: &sqlx::sqlite::SqliteRow) -> Result<Topic, StorageError> {
    let id = TopicId::new(row.try_get::<i64, _>("id").map_err(ser)?);
    let name: String = row.try_get("name").map_err(ser)?;
    let kind: String = row.try_get("type").map_err(ser)?;
    Topic::from_persisted(id, name, kind).map_err(ser)
}

pub(crate) fn map_session_row(row: &sqlx::sqlite::SqliteRow) -> Result<Session, StorageError> {
    let id = SessionId::new(row.try_get::<i64, _>("id").map_err(ser)?);
    let topic_id = TopicId::new(row.try_get::<i64, _>("topic_id").map_err(ser)?);
    let duration_seconds: i64 = row.try_get("duration_seconds").map_err(ser)?;
    let completed_at = row.try_get("completed_at").map_err(ser)?;
    Session::from_persisted(id, topic_id, duration_seconds, completed_at).map_err(ser)
}
