//! Enquiry API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};
use validator::Validate;

use shared::models::{Enquiry, EnquiryCreate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/enquiries - public contact form intake
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EnquiryCreate>,
) -> AppResult<Json<Enquiry>> {
    payload.validate()?;

    // an unknown tour reference degrades to a general enquiry
    let payload = match payload.tour_id.as_deref() {
        Some(id) if state.store.tour(id).is_none() => EnquiryCreate {
            tour_id: None,
            ..payload
        },
        _ => payload,
    };

    let enquiry = state.store.add_enquiry(payload, state.now());
    tracing::info!(enquiry = %enquiry.id, "Enquiry received");
    Ok(Json(enquiry))
}

/// GET /api/enquiries - admin inbox, newest first
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Enquiry>>> {
    if !current_user.is_admin() {
        return Err(AppError::forbidden("Admin role required"));
    }

    let mut enquiries = state.store.enquiries_snapshot();
    enquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(enquiries))
}
