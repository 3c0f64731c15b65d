use axum::{
    Extension, Json, Router,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    routing::post,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::feedback::use_cases::list_feedback::inbound::http as list_feedback_http;
use crate::modules::feedback::use_cases::submit_feedback::inbound::http as submit_feedback_http;
use crate::modules::predictions::use_cases::classify_text::inbound::http as classify_http;
use crate::modules::predictions::use_cases::describe_model::inbound::http as model_http;
use crate::modules::predictions::use_cases::get_stats::inbound::http as stats_http;
use crate::shell::config::AllowedOrigins;
use crate::shell::graphql::{self, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState, origins: &AllowedOrigins) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/health", get(health))
        .route("/model", get(model_http::handle))
        .route("/predict", post(classify_http::handle))
        .route("/predict_batch", post(classify_http::handle_batch))
        .route("/stats", get(stats_http::handle))
        .route(
            "/feedback",
            get(list_feedback_http::handle).post(submit_feedback_http::handle),
        )
        .route("/graphql", get(graphql::graphiql).post(graphql::execute))
        .with_state(state)
        .layer(Extension(schema))
        .layer(cors(origins))
        .layer(TraceLayer::new_for_http())
}

fn cors(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::from(Any),
        AllowedOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "ignoring unusable CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[derive(Serialize)]
struct Detail {
    detail: String,
}

/// 422 with a `{"detail": ...}` body, for requests that parse but do not validate.
pub fn unprocessable(error: impl ToString) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(Detail {
            detail: error.to_string(),
        }),
    )
        .into_response()
}

#[derive(Serialize)]
struct PersistFailures {
    stats: u64,
    feedback: u64,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    persist_failures: PersistFailures,
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        persist_failures: PersistFailures {
            stats: state.stats.persist_failures(),
            feedback: state.feedback.persist_failures(),
        },
    })
}
