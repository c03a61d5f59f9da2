//! Authentication API endpoints.

use axum::{extract::State, http::HeaderMap, Json};

use super::{error, success, ApiResult};
use crate::auth;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, UserProfile};
use crate::AppState;

/// POST /api/auth/login - Authenticate the operator.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    if !auth::verify_credentials(&state.config, &request.username, &request.password) {
        return error(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = state.sessions.issue();
    tracing::info!("Operator {} logged in", request.username);

    success(LoginResponse {
        token,
        user: UserProfile::admin(&request.username),
    })
}

/// POST /api/auth/logout - Revoke the current session token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    if let Some(token) = auth::token_from_headers(&headers) {
        state.sessions.revoke(&token);
    }
    success(())
}
