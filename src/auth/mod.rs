//! Session-token authentication module.
//!
//! Login checks a single configured operator credential pair using
//! constant-time comparison to mitigate timing attacks, then issues an
//! opaque session token kept in memory.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{codes, ErrorDetails, ErrorResponse};

/// Header name for the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// In-memory registry of issued session tokens.
#[derive(Default)]
pub struct SessionStore {
    tokens: RwLock<HashSet<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh opaque token.
    pub fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.write().unwrap().insert(token.clone());
        token
    }

    /// Revoke a token. Returns whether it was present.
    pub fn revoke(&self, token: &str) -> bool {
        self.tokens.write().unwrap().remove(token)
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.read().unwrap().contains(token)
    }
}

/// Check the supplied operator credentials against the configured pair.
pub fn verify_credentials(config: &Config, username: &str, password: &str) -> bool {
    // Bitwise AND keeps both comparisons running regardless of the first result
    constant_time_compare(username, &config.admin_username)
        & constant_time_compare(password, &config.admin_password)
}

/// Session authentication layer guarding the API routes.
pub async fn session_auth_layer(
    sessions: Arc<SessionStore>,
    auth_enabled: bool,
    request: Request,
    next: Next,
) -> Response {
    // With no password configured, allow all requests (dev mode)
    if !auth_enabled {
        return next.run(request).await;
    }

    match token_from_headers(request.headers()) {
        Some(token) if sessions.is_valid(&token) => next.run(request).await,
        Some(_) => unauthorized_response("Invalid session token"),
        None => unauthorized_response("Missing session token"),
    }
}

/// Extract the session token from the request headers.
///
/// Accepts either the dedicated header or an Authorization bearer token.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        return Some(token.to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
            details: None,
        },
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
