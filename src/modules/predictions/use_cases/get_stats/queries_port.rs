use crate::modules::predictions::core::prediction::PredictionLine;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub total_predictions: u64,
    pub label_distribution: BTreeMap<String, f64>,
    pub recent_predictions: Vec<PredictionLine>,
}

#[async_trait]
pub trait StatsQueries {
    /// Totals, distribution and up to `limit` recent predictions (all when `None`).
    async fn stats(&self, limit: Option<usize>) -> StatsView;
}
