use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::predictions::core::prediction::Classification;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PredictBody {
    pub text: String,
}

#[derive(Deserialize)]
pub struct PredictBatchBody {
    pub texts: Vec<String>,
}

#[derive(Serialize)]
pub struct PredictBatchResponse {
    pub predictions: Vec<Classification>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PredictBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.classify_handler.handle(&body.text).await {
        Ok(classification) => Json(classification).into_response(),
        Err(error) => unprocessable(error),
    }
}

pub async fn handle_batch(
    State(state): State<AppState>,
    body: Result<Json<PredictBatchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.classify_handler.handle_batch(&body.texts).await {
        Ok(predictions) => Json(PredictBatchResponse { predictions }).into_response(),
        Err(error) => unprocessable(error),
    }
}
