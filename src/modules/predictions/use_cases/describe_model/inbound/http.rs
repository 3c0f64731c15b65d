use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ModelInfoResponse {
    pub name: String,
    pub classes: Vec<String>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(ModelInfoResponse {
        name: state.classifier.name().to_string(),
        classes: state.classifier.labels().to_vec(),
    })
}
