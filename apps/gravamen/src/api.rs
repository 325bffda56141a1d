//! # HTTP API
//!
//! The axum surface the intake form calls. Incomplete classification
//! input is an ordinary 200 with a null severity, mirroring the form's
//! "no result yet" state; only unparseable bodies are an error status.

use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use gravamen_core::{IncidentDraft, SeverityBand, WeightReference};
use serde::Serialize;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the API router.
///
/// CORS is permissive: the caller is a browser form served from another
/// origin. The classifier holds no state, so handlers share nothing.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/classify", post(classify))
        .route("/api/v1/weights", get(weights))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gravamen api listening");
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("ctrl-c handler unavailable; serving until killed");
        std::future::pending::<()>().await;
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    severity: Option<SeverityBand>,
    score: Option<f64>,
    missing: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
}

/// Classify a possibly partial draft.
async fn classify(payload: Result<Json<IncidentDraft>, JsonRejection>) -> Response {
    let Json(draft) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiError {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    Json(ClassifyResponse {
        severity: draft.assess(),
        score: draft.score(),
        missing: draft.missing_fields(),
    })
    .into_response()
}

/// The weight tables and band thresholds.
async fn weights() -> Json<WeightReference> {
    Json(WeightReference::collect())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
