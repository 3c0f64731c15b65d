use std::path::Path;
use std::sync::Arc;

use crate::modules::feedback::core::feedback::FeedbackStore;
use crate::modules::predictions::adapters::outbound::keyword_classifier::KeywordClassifier;
use crate::modules::predictions::core::prediction::StatsStore;
use crate::shell::state::AppState;

pub const STATS_CAPACITY: usize = 10;
pub const FEEDBACK_CAPACITY: usize = 10;

/// Fully wired state whose stores live under `dir`; reopening the same `dir` recovers them.
pub async fn make_test_state(dir: &Path) -> AppState {
    let stats = StatsStore::open(dir.join("prediction_history.jsonl"), STATS_CAPACITY)
        .await
        .expect("failed to open stats store");
    let feedback = FeedbackStore::open(dir.join("feedback.jsonl"), FEEDBACK_CAPACITY)
        .await
        .expect("failed to open feedback store");
    AppState::new(
        Arc::new(KeywordClassifier::new()),
        Arc::new(stats),
        Arc::new(feedback),
    )
}
