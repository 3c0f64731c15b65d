use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::predictions::core::prediction::PredictionLine;
use crate::modules::predictions::use_cases::get_stats::queries_port::StatsView;
use crate::shared::core::validation::{MAX_LIST_LIMIT, clamp_limit};
use crate::shell::graphql::{GqlLabelScore, label_scores};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPrediction {
    pub text: String,
    pub label: String,
    pub scores: Vec<GqlLabelScore>,
    pub timestamp: String,
}

impl From<PredictionLine> for GqlPrediction {
    fn from(p: PredictionLine) -> Self {
        Self {
            scores: label_scores(&p.scores),
            text: p.text,
            label: p.label,
            timestamp: p.timestamp,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStats {
    pub total_predictions: u64,
    pub label_distribution: Vec<GqlLabelScore>,
    pub recent_predictions: Vec<GqlPrediction>,
}

impl From<StatsView> for GqlStats {
    fn from(v: StatsView) -> Self {
        Self {
            total_predictions: v.total_predictions,
            label_distribution: label_scores(&v.label_distribution),
            recent_predictions: v.recent_predictions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct StatsQuery;

#[Object]
impl StatsQuery {
    async fn stats(&self, context: &Context<'_>, limit: Option<i64>) -> GqlResult<GqlStats> {
        let state = context.data_unchecked::<AppState>();
        let limit = limit.map(|limit| clamp_limit(Some(limit), MAX_LIST_LIMIT));
        Ok(state.stats_queries.stats(limit).await.into())
    }
}
