// src/auth/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn auth_routes() -> Router {
    Router::new().route("/api/auth/me", get(handlers::me))
}
