// Read side of the prediction history, served straight from the stats store.

use crate::modules::predictions::core::prediction::StatsStore;
use crate::modules::predictions::use_cases::get_stats::queries_port::{StatsQueries, StatsView};

#[async_trait::async_trait]
impl StatsQueries for StatsStore {
    async fn stats(&self, limit: Option<usize>) -> StatsView {
        let snapshot = self.snapshot_limited(limit).await;
        StatsView {
            total_predictions: snapshot.total,
            label_distribution: snapshot.distribution,
            recent_predictions: snapshot.recent,
        }
    }
}
