use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::feedback::core::feedback::FeedbackLine;
use crate::modules::feedback::use_cases::submit_feedback::command::SubmitFeedback;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SubmitFeedbackResponse {
    pub status: &'static str,
    pub entry: FeedbackLine,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitFeedback>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.feedback_handler.handle(command).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(SubmitFeedbackResponse { status: "ok", entry }),
        )
            .into_response(),
        Err(error) => unprocessable(error),
    }
}
