use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::predictions::core::prediction::Classification;
use crate::shell::graphql::{GqlLabelScore, label_scores};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlClassification {
    pub label: String,
    pub scores: Vec<GqlLabelScore>,
}

impl From<Classification> for GqlClassification {
    fn from(c: Classification) -> Self {
        Self {
            scores: label_scores(&c.scores),
            label: c.label,
        }
    }
}

#[derive(Default)]
pub struct ClassifyMutation;

#[Object]
impl ClassifyMutation {
    async fn predict(&self, context: &Context<'_>, text: String) -> GqlResult<GqlClassification> {
        let state = context.data_unchecked::<AppState>();
        let classification = state.classify_handler.handle(&text).await?;
        Ok(classification.into())
    }

    async fn predict_batch(
        &self,
        context: &Context<'_>,
        texts: Vec<String>,
    ) -> GqlResult<Vec<GqlClassification>> {
        let state = context.data_unchecked::<AppState>();
        let classifications = state.classify_handler.handle_batch(&texts).await?;
        Ok(classifications.into_iter().map(Into::into).collect())
    }
}
