// src/main.rs
use anyhow::Context;
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use std::env;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod auth;
mod common;
mod dashboard;
mod logging_middleware;
mod resumes;
mod services;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use auth::models::DemoIdentity;
use common::AppState;
use resumes::models::ResumeRecord;
use resumes::store::ResumeStore;
use services::ClipboardService;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let share_base_url =
        env::var("SHARE_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let demo_identity = DemoIdentity::from_env();
    if demo_identity.is_enabled() {
        info!(email = %demo_identity.email, "Demo identity enabled for unidentified requests");
    } else {
        info!("Demo identity disabled; requests without a user header are anonymous");
    }

    let clipboard = ClipboardService::from_env();
    info!(
        clipboard_enabled = clipboard.is_enabled(),
        "Clipboard service initialized"
    );

    // ========================================================================
    // SEED COLLECTION
    // ========================================================================

    let records = load_seed_records().await?;
    let store = ResumeStore::new(records).context("seed collection violates invariants")?;
    info!(resume_count = store.len(), "Resume collection seeded");

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState {
        store,
        share_base_url,
        demo_identity,
        clipboard,
    };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        .merge(auth::auth_routes())
        .merge(resumes::resumes_routes())
        .merge(dashboard::dashboard_routes())
        // Add request/response body logging in debug mode
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared.clone()))
        .layer({
            let cors_origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:5173".to_string()
            });

            let origins: Vec<axum::http::HeaderValue> = cors_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::HeaderName::from_static("x-user-email"),
                ])
        })
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Load the seed collection: a JSON file named by RESUME_SEED_PATH when
/// configured, the built-in demo records otherwise.
async fn load_seed_records() -> anyhow::Result<Vec<ResumeRecord>> {
    match env::var("RESUME_SEED_PATH").ok().filter(|p| !p.is_empty()) {
        Some(path) => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read seed file {}", path))?;
            let mut records: Vec<ResumeRecord> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse seed file {}", path))?;
            resumes::seed::assign_missing_ids(&mut records);
            info!(path = %path, resume_count = records.len(), "Loaded seed file");
            Ok(records)
        }
        None => Ok(resumes::seed::builtin_records()),
    }
}
