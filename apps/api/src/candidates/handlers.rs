use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateInput, CandidateRecord};
use crate::state::AppState;

/// POST /candidates
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(req): Json<CandidateInput>,
) -> Result<(StatusCode, Json<CandidateRecord>), AppError> {
    req.validate()?;
    let record = state.store.create(req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateRecord>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

/// PUT /candidates/:id
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CandidateInput>,
) -> Result<Json<CandidateRecord>, AppError> {
    req.validate()?;
    Ok(Json(state.store.update(id, req).await?))
}

/// DELETE /candidates/:id
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    state.store.delete(id).await?;
    Ok(Json(json!({ "message": "Candidate deleted successfully" })))
}
