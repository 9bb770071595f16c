// src/resumes/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn resumes_routes() -> Router {
    Router::new()
        .route("/api/resumes", get(handlers::list_resumes))
        .route("/api/resumes/export", get(handlers::export_resumes))
        .route(
            "/api/resumes/:id",
            get(handlers::get_resume).delete(handlers::delete_resume),
        )
        .route("/api/resumes/:id/archive", post(handlers::archive_resume))
        .route("/api/resumes/:id/share", post(handlers::share_resume))
}
