#![forbid(unsafe_code)]

pub mod error;
pub mod routes;

use std::sync::Arc;

use services::{Clock, ProgressService, SessionService, TopicService};
use storage::repository::Storage;

/// Shared handler state: the three services plus the raw storage handle the
/// development cleanup route resets through.
#[derive(Clone)]
pub struct AppState {
    pub topics: TopicService,
    pub sessions: SessionService,
    pub progress: ProgressService,
    pub storage: Storage,
}

impl AppState {
    #[must_use]
    pub fn new(clock: Clock, storage: Storage) -> Self {
        let topics = TopicService::new(Arc::clone(&storage.topics));
        let sessions = SessionService::new(
            clock,
            Arc::clone(&storage.topics),
            Arc::clone(&storage.sessions),
        );
        let progress = ProgressService::new(
            Arc::clone(&storage.topics),
            Arc::clone(&storage.sessions),
        );
        Self {
            topics,
            sessions,
            progress,
            storage,
        }
    }
}
