use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::leaderboard::domain::ScoreCategory;
use crate::leaderboard::router::{leaderboard_handler, LeaderboardRequest};
use crate::leaderboard::{leaderboard_router, QueryParams};

#[tokio::test]
async fn leaderboard_handler_returns_ranked_page() {
    let request = LeaderboardRequest {
        snapshot: reference_snapshot(),
        query: QueryParams {
            category: Some("Culture Champion".to_string()),
            ..QueryParams::default()
        },
    };

    let response = leaderboard_handler(State(Arc::new(service())), axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["matched"], json!(2));
    let ranks: Vec<u64> = body["page"]["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["rank"].as_u64())
        .collect();
    assert_eq!(ranks, vec![4, 9]);
    assert_eq!(body["diagnostics"][0]["kind"], json!("unknown_badge_id"));
    assert_eq!(body["diagnostics"][0]["badge_id"], json!("innovation-leader"));
}

#[tokio::test]
async fn leaderboard_handler_rejects_out_of_range_scores() {
    let mut snapshot = reference_snapshot();
    snapshot.records[2]
        .point_breakdown
        .insert(ScoreCategory::Attendance, 21);
    let request = LeaderboardRequest {
        snapshot,
        query: QueryParams::default(),
    };

    let response = leaderboard_handler(State(Arc::new(service())), axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("EMP003"));
    assert!(message.contains("attendance score 21"));
}

#[tokio::test]
async fn router_accepts_camel_case_breakdowns_over_http() {
    let app = leaderboard_router(Arc::new(service()));
    let payload = json!({
        "snapshot": {
            "period": "2024-10",
            "records": [
                {
                    "employee_id": "EMP023",
                    "display_name": "Priya Patel",
                    "department": "Accounting",
                    "status": "Active",
                    "category": "Most Punctual",
                    "point_breakdown": { "attendance": 20, "peerReviews": 15 },
                    "previous_rank": null,
                    "achievement_facts": [
                        { "badge_id": "perfect-attendance", "earned_on": "2024-09-30" }
                    ]
                }
            ]
        },
        "query": { "search": "023" }
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/leaderboard")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let entry = &body["page"]["items"][0];
    assert_eq!(entry["total_score"], json!(35));
    assert_eq!(entry["max_score"], json!(40));
    assert_eq!(entry["rank_trend"], json!("New"));
    assert_eq!(entry["badges"]["shown"][0]["earned_on"], json!("2024-09-30"));
}

#[tokio::test]
async fn router_serves_badge_catalog() {
    let app = leaderboard_router(Arc::new(service()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/leaderboard/badges")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let badges = body.as_array().expect("catalog array");
    assert_eq!(badges.len(), 8);
    assert_eq!(badges[0]["id"], json!("top-performer"));
    assert_eq!(badges[0]["icon"], json!("trophy"));
}
