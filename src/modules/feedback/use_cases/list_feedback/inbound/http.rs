use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::validation::clamp_limit;
use crate::shell::state::AppState;

pub const DEFAULT_LIMIT: usize = 20;

#[derive(Deserialize)]
pub struct ListFeedbackParams {
    pub limit: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListFeedbackParams>,
) -> impl IntoResponse {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT);
    Json(state.feedback_queries.list(limit).await)
}
