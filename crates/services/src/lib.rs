#![forbid(unsafe_code)]

pub mod error;
pub mod progress_service;
pub mod session_service;
pub mod topic_service;

pub use tracker_core::Clock;

pub use error::{ProgressServiceError, SessionServiceError, TopicServiceError};
pub use progress_service::ProgressService;
pub use session_service::SessionService;
pub use topic_service::TopicService;
