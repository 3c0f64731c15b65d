use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::feedback::core::feedback::FeedbackLine;
use crate::modules::feedback::use_cases::list_feedback::inbound::http::DEFAULT_LIMIT;
use crate::shared::core::validation::clamp_limit;
use crate::shell::graphql::{GqlLabelScore, label_scores};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlFeedbackEntry {
    pub text: String,
    pub predicted_label: String,
    pub user_label: Option<String>,
    pub scores: Option<Vec<GqlLabelScore>>,
    pub notes: Option<String>,
    pub timestamp: String,
}

impl From<FeedbackLine> for GqlFeedbackEntry {
    fn from(f: FeedbackLine) -> Self {
        Self {
            scores: f.scores.as_ref().map(label_scores),
            text: f.text,
            predicted_label: f.predicted_label,
            user_label: f.user_label,
            notes: f.notes,
            timestamp: f.timestamp,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlFeedbackList {
    pub total_items: u64,
    pub items: Vec<GqlFeedbackEntry>,
}

#[derive(Default)]
pub struct FeedbackQuery;

#[Object]
impl FeedbackQuery {
    async fn feedback(&self, context: &Context<'_>, limit: Option<i64>) -> GqlResult<GqlFeedbackList> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .feedback_queries
            .list(clamp_limit(limit, DEFAULT_LIMIT))
            .await;
        Ok(GqlFeedbackList {
            total_items: view.total_items,
            items: view.items.into_iter().map(Into::into).collect(),
        })
    }
}
