// src/resumes/handlers.rs

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::AuthContext;
use crate::common::{safe_email_log, ApiError, AppState, Validator};

use super::export;
use super::models::{ExportQuery, ResumeListResponse, ResumeQuery, ResumeRecord, ViewMeta};
use super::validators::{ExportQueryValidator, ResumeQueryValidator};

/// GET /api/resumes - List the visible (filtered, sorted) projection
pub async fn list_resumes(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthContext,
    Query(query): Query<ResumeQuery>,
) -> Result<Json<ResumeListResponse>, ApiError> {
    let validation = ResumeQueryValidator.validate(&query);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let options = query.view_options();
    let state = state_lock.read().await;
    let resumes = state.store.visible(&options);

    info!(
        visible = resumes.len(),
        total = state.store.len(),
        search = %options.search,
        status = options.status.as_str(),
        experience = options.bracket.as_str(),
        sort_by = options.sort.as_str(),
        "Computed resume view"
    );

    let meta = ViewMeta {
        visible: resumes.len(),
        total: state.store.len(),
        search: options.search.clone(),
        status: options.status.as_str().to_string(),
        experience: options.bracket.as_str().to_string(),
        sort_by: options.sort.as_str().to_string(),
        view: query.view_mode().as_str().to_string(),
    };

    Ok(Json(ResumeListResponse { resumes, meta }))
}

/// GET /api/resumes/:id - Full record for the detail view
pub async fn get_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthContext,
    Path(resume_id): Path<String>,
) -> Result<Json<ResumeRecord>, ApiError> {
    let state = state_lock.read().await;

    match state.store.get(&resume_id) {
        Some(record) => Ok(Json(record.clone())),
        None => {
            warn!(resume_id = %resume_id, "Resume lookup failed: not found");
            Err(ApiError::NotFound("Resume not found".to_string()))
        }
    }
}

/// POST /api/resumes/:id/archive - Archive a resume in place
pub async fn archive_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthContext,
    Path(resume_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut state = state_lock.write().await;

    if !state.store.archive(&resume_id) {
        warn!(
            resume_id = %resume_id,
            user = %safe_email_log(&authed.email),
            "Archive failed: resume not found"
        );
        return Err(ApiError::NotFound("Resume not found".to_string()));
    }

    info!(
        resume_id = %resume_id,
        user = %safe_email_log(&authed.email),
        "Resume archived"
    );

    Ok(Json(json!({
        "message": "Resume archived successfully",
        "id": resume_id,
        "status": "archived"
    })))
}

/// DELETE /api/resumes/:id - Remove a resume permanently
pub async fn delete_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthContext,
    Path(resume_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut state = state_lock.write().await;

    if !state.store.remove(&resume_id) {
        warn!(
            resume_id = %resume_id,
            user = %safe_email_log(&authed.email),
            "Delete failed: resume not found"
        );
        return Err(ApiError::NotFound("Resume not found".to_string()));
    }

    info!(
        resume_id = %resume_id,
        user = %safe_email_log(&authed.email),
        remaining = state.store.len(),
        "Resume deleted"
    );

    Ok(Json(json!({
        "message": "Resume deleted successfully",
        "id": resume_id
    })))
}

/// POST /api/resumes/:id/share - Build a share reference and copy it to the
/// system clipboard. Clipboard denial is non-fatal: the share text is still
/// returned and the message says the clipboard was unavailable.
pub async fn share_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthContext,
    Path(resume_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await;

    if state.store.get(&resume_id).is_none() {
        warn!(
            resume_id = %resume_id,
            user = %safe_email_log(&authed.email),
            "Share failed: resume not found"
        );
        return Err(ApiError::NotFound("Resume not found".to_string()));
    }

    let share_text = format!("Resume ID: {}", resume_id);
    let share_url = format!(
        "{}/api/resumes/{}",
        state.share_base_url.trim_end_matches('/'),
        resume_id
    );

    let (copied, message) = match state.clipboard.copy_text(&share_text) {
        Ok(()) => (true, "Resume link copied to clipboard"),
        Err(e) => {
            warn!(
                resume_id = %resume_id,
                error = %e,
                "Clipboard write failed, returning share text only"
            );
            (false, "Share link created, clipboard unavailable")
        }
    };

    info!(
        resume_id = %resume_id,
        user = %safe_email_log(&authed.email),
        copied = copied,
        "Resume share reference created"
    );

    Ok(Json(json!({
        "message": message,
        "id": resume_id,
        "share_text": share_text,
        "share_url": share_url,
        "copied": copied
    })))
}

/// GET /api/resumes/export - Export the visible projection in CSV or JSON
/// format. The same filter parameters as the list endpoint apply, so the
/// export matches exactly what the caller is looking at.
pub async fn export_resumes(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthContext,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let validation = ExportQueryValidator.validate(&query);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let format = query.format.as_deref().unwrap_or("csv");
    let options = query.as_resume_query().view_options();

    let state = state_lock.read().await;
    let visible = state.store.visible(&options);
    let record_count = visible.len();

    match format {
        "csv" => {
            let csv_content = export::to_csv(&visible);

            info!(
                user = %safe_email_log(&authed.email),
                record_count = record_count,
                format = "csv",
                "Resumes exported"
            );

            Ok((
                StatusCode::OK,
                [
                    ("Content-Type", "text/csv"),
                    (
                        "Content-Disposition",
                        "attachment; filename=\"resumes_export.csv\"",
                    ),
                ],
                csv_content,
            ))
        }
        "json" => {
            let json_content = serde_json::to_string_pretty(&visible).map_err(|e| {
                warn!(error = %e, "JSON serialization error during resume export");
                ApiError::ExportError("Failed to serialize resume data".to_string())
            })?;

            info!(
                user = %safe_email_log(&authed.email),
                record_count = record_count,
                format = "json",
                "Resumes exported"
            );

            Ok((
                StatusCode::OK,
                [
                    ("Content-Type", "application/json"),
                    (
                        "Content-Disposition",
                        "attachment; filename=\"resumes_export.json\"",
                    ),
                ],
                json_content,
            ))
        }
        _ => Err(ApiError::BadRequest(
            "Invalid format. Use 'csv' or 'json'".to_string(),
        )),
    }
}
