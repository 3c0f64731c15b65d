use crate::modules::feedback::core::feedback::FeedbackStore;
use crate::modules::feedback::use_cases::list_feedback::queries_port::{
    FeedbackListView, FeedbackQueries,
};

#[async_trait::async_trait]
impl FeedbackQueries for FeedbackStore {
    async fn list(&self, limit: usize) -> FeedbackListView {
        let snapshot = self.snapshot_limited(Some(limit)).await;
        FeedbackListView {
            total_items: snapshot.total,
            items: snapshot.recent,
        }
    }
}
