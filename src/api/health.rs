//! Liveness and catalog summary endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness answer with a summary of the in-memory catalog
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    /// `healthy` or `ready`
    pub status: String,
    pub version: String,
    /// Records currently in the catalog
    pub records: usize,
    /// Outstanding ledger entries
    pub loans: usize,
}

async fn summary(state: &crate::AppState, status: &str) -> StatusResponse {
    StatusResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.services.catalog.count_records().await,
        loans: state.services.loans.count_loans().await,
    }
}

/// Liveness check with record and loan counts
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = StatusResponse)
    )
)]
pub async fn health_check(State(state): State<crate::AppState>) -> Json<StatusResponse> {
    Json(summary(&state, "healthy").await)
}

/// The catalog starts empty in memory, so readiness only needs the lock to
/// be obtainable.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Catalog is serving", body = StatusResponse)
    )
)]
pub async fn readiness_check(State(state): State<crate::AppState>) -> Json<StatusResponse> {
    Json(summary(&state, "ready").await)
}
