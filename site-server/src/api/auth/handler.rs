//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub username: String,
    pub role: String,
}

/// POST /api/auth/login - verify credentials, issue a token
///
/// The only write the frontend may keep client-side afterwards is a
/// "show admin nav" hint; authorization itself happens per request
/// against this token.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if !state.credentials.verify(&payload.username, &payload.password) {
        tracing::warn!(target: "security", username = %payload.username, "Login rejected");
        return Err(AppError::invalid_credentials());
    }

    let username = state.credentials.username().to_string();
    let token = state
        .jwt_service
        .generate_token("admin-1", &username, "admin")
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    tracing::info!(target: "security", username = %username, "Admin login");

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_service.config.expiration_minutes * 60,
        username,
        role: "admin".to_string(),
    }))
}
