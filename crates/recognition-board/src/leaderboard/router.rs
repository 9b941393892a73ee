use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ActivitySnapshot;
use super::service::{LeaderboardService, QueryParams};

#[derive(Debug, Deserialize)]
pub struct LeaderboardRequest {
    pub snapshot: ActivitySnapshot,
    #[serde(default)]
    pub query: QueryParams,
}

/// Router builder exposing the ranking and badge catalog endpoints.
pub fn leaderboard_router(service: Arc<LeaderboardService>) -> Router {
    Router::new()
        .route("/api/v1/leaderboard", post(leaderboard_handler))
        .route("/api/v1/leaderboard/badges", get(badge_catalog_handler))
        .with_state(service)
}

pub(crate) async fn leaderboard_handler(
    State(service): State<Arc<LeaderboardService>>,
    axum::Json(request): axum::Json<LeaderboardRequest>,
) -> Response {
    let query = service.resolve_query(request.query);
    match service.leaderboard(&request.snapshot, &query) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn badge_catalog_handler(
    State(service): State<Arc<LeaderboardService>>,
) -> Response {
    let catalog = service.engine().catalog().clone();
    (StatusCode::OK, axum::Json(catalog)).into_response()
}
