mod ids;
mod progress;
mod session;
mod topic;

pub use ids::{ParseIdError, SessionId, TopicId};
pub use progress::{ProgressEntry, aggregate_progress, join_topics, sort_entries, sum_by_topic};
pub use session::{Session, SessionError};
pub use topic::{Topic, TopicError};
