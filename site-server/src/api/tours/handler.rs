//! Tour API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::Tour;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub tag: Option<String>,
}

/// GET /api/tours - tour catalog, optionally filtered by tag
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Tour>>> {
    let tours = state.store.tours();
    let tours = match query.tag.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(tag) => tours.iter().filter(|t| t.has_tag(tag)).cloned().collect(),
        None => tours.to_vec(),
    };
    Ok(Json(tours))
}

/// GET /api/tours/{id} - single tour
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tour>> {
    let tour = state
        .store
        .tour(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Tour {}", id)))?;
    Ok(Json(tour))
}
