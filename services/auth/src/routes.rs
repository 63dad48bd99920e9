//! Auth service routes

use axum::{Json, Router, response::IntoResponse, routing::get};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::dice;

/// Create the router for the auth service
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/rolldice", get(roll_dice))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "auth-service"
    }))
}

/// Roll a six-sided die, answered as plain text
pub async fn roll_dice() -> String {
    let roll = dice::roll();
    debug!(roll, "Rolled dice");
    roll.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn spawn_app() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, create_router()).await.unwrap();
        });
        format!("http://{address}")
    }

    #[tokio::test]
    async fn rolldice_returns_a_face_of_the_die() {
        let base = spawn_app().await;
        let client = reqwest::Client::new();

        for _ in 0..100 {
            let response = client
                .get(format!("{base}/rolldice"))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::OK);

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert!(content_type.starts_with("text/plain"));

            let roll: u8 = response.text().await.unwrap().parse().unwrap();
            assert!(dice::FACES.contains(&roll));
        }
    }

    #[tokio::test]
    async fn health_check_reports_service() {
        let base = spawn_app().await;

        let body: serde_json::Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "auth-service");
    }
}
