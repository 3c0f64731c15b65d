use crate::modules::feedback::core::feedback::FeedbackLine;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackListView {
    pub total_items: u64,
    pub items: Vec<FeedbackLine>,
}

#[async_trait]
pub trait FeedbackQueries {
    async fn list(&self, limit: usize) -> FeedbackListView;
}
