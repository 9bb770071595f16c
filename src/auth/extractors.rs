//! Authentication context extractor for Axum
//!
//! This is deliberately a stub: the product demo has no real login flow.
//! The context carries who the caller claims to be (or the configured demo
//! identity) so handlers can attribute actions in logs, and nothing more.
//! Any real deployment would replace this extractor with one backed by an
//! actual authentication service.

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::common::{safe_email_log, ApiError, AppState};

/// Resolved caller identity.
///
/// `is_authenticated` is false only when no header identity is present and
/// the demo identity is disabled; extraction itself never rejects.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub email: String,
    pub is_authenticated: bool,
}

pub const USER_EMAIL_HEADER: &str = "x-user-email";

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await;

        let header_email = parts
            .headers
            .get(USER_EMAIL_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let context = match header_email {
            Some(email) => AuthContext {
                email,
                is_authenticated: true,
            },
            None if app_state.demo_identity.is_enabled() => AuthContext {
                email: app_state.demo_identity.email.clone(),
                is_authenticated: true,
            },
            None => AuthContext {
                email: String::new(),
                is_authenticated: false,
            },
        };

        debug!(
            email = %safe_email_log(&context.email),
            is_authenticated = context.is_authenticated,
            "Resolved auth context"
        );

        Ok(context)
    }
}
