use serde::Serialize;
use std::collections::HashMap;

use crate::model::ids::TopicId;
use crate::model::session::Session;
use crate::model::topic::Topic;

/// Derived per-topic summary of total time spent, in whole minutes.
///
/// Never stored; recomputed fresh on every progress query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub topic_name: String,
    pub total_minutes: i64,
}

/// Group sessions by topic and sum their durations in seconds.
#[must_use]
pub fn sum_by_topic(sessions: &[Session]) -> HashMap<TopicId, i64> {
    let mut sums = HashMap::new();
    for session in sessions {
        *sums.entry(session.topic_id()).or_insert(0) += session.duration_seconds();
    }
    sums
}

/// Join per-topic duration sums with topic metadata.
///
/// This is an inner join: a sum whose topic id matches no topic contributes no
/// entry, and a topic with no sessions contributes no entry. Seconds are
/// converted to minutes with half-up rounding (ties away from zero).
#[must_use]
pub fn join_topics(sums: &HashMap<TopicId, i64>, topics: &[Topic]) -> Vec<ProgressEntry> {
    topics
        .iter()
        .filter_map(|topic| {
            sums.get(&topic.id()).map(|total_seconds| ProgressEntry {
                topic_name: topic.name().to_owned(),
                total_minutes: minutes_rounded(*total_seconds),
            })
        })
        .collect()
}

/// Sort entries by total minutes descending; ties break on topic name
/// ascending so the report order is deterministic.
pub fn sort_entries(entries: &mut [ProgressEntry]) {
    entries.sort_by(|a, b| {
        b.total_minutes
            .cmp(&a.total_minutes)
            .then_with(|| a.topic_name.cmp(&b.topic_name))
    });
}

/// The full progress pipeline: group-and-sum, inner join, round, sort.
#[must_use]
pub fn aggregate_progress(sessions: &[Session], topics: &[Topic]) -> Vec<ProgressEntry> {
    let sums = sum_by_topic(sessions);
    let mut entries = join_topics(&sums, topics);
    sort_entries(&mut entries);
    entries
}

#[allow(clippy::cast_precision_loss)]
fn minutes_rounded(total_seconds: i64) -> i64 {
    // f64::round rounds half away from zero, which is the policy here.
    (total_seconds as f64 / 60.0).round() as i64
}
