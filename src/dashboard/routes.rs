// src/dashboard/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn dashboard_routes() -> Router {
    Router::new().route("/api/dashboard/metrics", get(handlers::get_dashboard_metrics))
}
