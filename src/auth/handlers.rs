// src/auth/handlers.rs

use axum::response::Json;
use serde_json::json;

use super::AuthContext;

/// GET /api/auth/me - Echo the resolved caller identity
pub async fn me(authed: AuthContext) -> Json<serde_json::Value> {
    Json(json!({
        "email": authed.email,
        "is_authenticated": authed.is_authenticated
    }))
}
