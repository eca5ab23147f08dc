use crate::config::Config;
use crate::db_storage::LeadStorage;
use crate::errors::AppError;
use crate::models::{Lead, LeadPayload};
use crate::validation::validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Application configuration.
    pub config: Config,
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-leads-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /
///
/// Service index listing the available endpoints.
pub async fn index() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Lead Management API Server",
            "endpoints": {
                "health": "/api/health",
                "leads": "/api/leads"
            }
        })),
    )
}

/// GET /api/leads
///
/// Returns every stored lead, newest first.
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Lead>>, AppError> {
    tracing::info!("GET /api/leads");

    let storage = LeadStorage::new(state.db.clone());
    let leads = storage.list_all().await?;

    tracing::info!("Returning {} leads", leads.len());

    Ok(Json(leads))
}

/// POST /api/leads
///
/// Validates the submitted payload and persists it. Answers 201 with the
/// stored lead, 400 with the field -> message map when validation fails, or
/// 500 when the store is unreachable.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LeadPayload>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    tracing::info!("POST /api/leads - name: {:?}", payload.name);

    let new_lead = validate(&payload)?;

    let storage = LeadStorage::new(state.db.clone());
    let lead = storage.insert(&new_lead).await?;

    tracing::info!("Created lead {} ({})", lead.id, lead.email);

    Ok((StatusCode::CREATED, Json(lead)))
}

/// DELETE /api/leads/:id
///
/// Answers 204 when the lead existed and was removed, 404 when the id is
/// unknown. A storage outage is a 500, never reported as not-found.
pub async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    tracing::info!("DELETE /api/leads/{}", id);

    let storage = LeadStorage::new(state.db.clone());
    if storage.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Lead {} not found", id)))
    }
}
