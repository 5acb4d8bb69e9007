//! Deal API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shared::models::Deal;

use crate::core::ServerState;
use crate::economics::{self, Countdown};
use crate::utils::{AppError, AppResult};

/// Deal record plus its derived fields
///
/// Derived values are computed per response and never stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct DealView {
    #[serde(flatten)]
    pub deal: Deal,
    pub discount_percent: u32,
    pub is_active: bool,
    pub ends_soon: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<Countdown>,
}

fn view(deal: &Deal, now: i64, ends_soon_threshold_ms: i64) -> DealView {
    DealView {
        discount_percent: economics::discount_percent(deal.original_price, deal.sale_price),
        is_active: economics::is_active(deal, now),
        ends_soon: economics::ends_soon(deal, now, ends_soon_threshold_ms),
        countdown: deal.ends_at.map(|ends_at| Countdown::until(ends_at, now)),
        deal: deal.clone(),
    }
}

/// GET /api/deals - all deals with derived fields
///
/// `now` is captured once per request so every deal in the listing is
/// evaluated against the same instant.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DealView>>> {
    let now = state.now();
    let threshold = state.config.ends_soon_threshold_ms();

    let views = state
        .store
        .deals()
        .iter()
        .map(|d| view(d, now, threshold))
        .collect();
    Ok(Json(views))
}

/// GET /api/deals/{id} - single deal with derived fields
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DealView>> {
    let now = state.now();
    let threshold = state.config.ends_soon_threshold_ms();

    let deal = state
        .store
        .deal(&id)
        .ok_or_else(|| AppError::not_found(format!("Deal {}", id)))?;
    Ok(Json(view(deal, now, threshold)))
}
