// src/dashboard/handlers.rs

use axum::{extract::Extension, Json};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::auth::AuthContext;
use crate::common::{safe_email_log, ApiError, AppState};

use super::metrics::compute_metrics;
use super::models::DashboardMetrics;

/// GET /api/dashboard/metrics - Collection statistics for the dashboard
pub async fn get_dashboard_metrics(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthContext,
) -> Result<Json<DashboardMetrics>, ApiError> {
    let state = state_lock.read().await;

    let metrics = compute_metrics(state.store.records(), Utc::now().date_naive());

    info!(
        user = %safe_email_log(&authed.email),
        total_resumes = metrics.total_resumes,
        "Dashboard metrics computed"
    );

    Ok(Json(metrics))
}
