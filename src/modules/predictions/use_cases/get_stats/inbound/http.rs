use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::validation::{MAX_LIST_LIMIT, clamp_limit};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StatsParams {
    pub limit: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    let limit = params.limit.map(|limit| clamp_limit(Some(limit), MAX_LIST_LIMIT));
    Json(state.stats_queries.stats(limit).await)
}
