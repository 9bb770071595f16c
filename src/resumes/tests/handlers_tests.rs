// src/resumes/tests/handlers_tests.rs

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::extract::{Extension, Path, Query};
    use axum::response::IntoResponse;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::auth::extractors::AuthContext;
    use crate::auth::models::DemoIdentity;
    use crate::common::{ApiError, AppState};
    use crate::resumes::handlers;
    use crate::resumes::models::{ExportQuery, ResumeQuery, ResumeStatus};
    use crate::resumes::seed::builtin_records;
    use crate::resumes::store::ResumeStore;
    use crate::services::ClipboardService;

    fn app_state() -> Arc<RwLock<AppState>> {
        let store = ResumeStore::new(builtin_records()).expect("valid builtin seed");
        Arc::new(RwLock::new(AppState {
            store,
            share_base_url: "http://localhost:8080".to_string(),
            demo_identity: DemoIdentity {
                enabled: true,
                email: "demo@resumedesk.dev".to_string(),
            },
            // Disabled so the share handler exercises the denial fallback
            // instead of touching the host clipboard.
            clipboard: ClipboardService::new(false),
        }))
    }

    fn demo_user() -> AuthContext {
        AuthContext {
            email: "demo@resumedesk.dev".to_string(),
            is_authenticated: true,
        }
    }

    #[tokio::test]
    async fn test_list_resumes_applies_filters_and_meta() {
        let state = app_state();
        let query = ResumeQuery {
            status: Some("processed".to_string()),
            sort_by: Some("match_score".to_string()),
            ..Default::default()
        };

        let json = handlers::list_resumes(Extension(state), demo_user(), Query(query))
            .await
            .expect("valid query succeeds");
        let response = json.0;

        assert_eq!(response.meta.total, 6);
        assert_eq!(response.meta.visible, 3);
        assert_eq!(response.meta.status, "processed");
        assert_eq!(response.meta.sort_by, "match_score");
        assert!(response
            .resumes
            .iter()
            .all(|r| r.status == ResumeStatus::Processed));
    }

    #[tokio::test]
    async fn test_list_resumes_rejects_invalid_status() {
        let state = app_state();
        let query = ResumeQuery {
            status: Some("bogus".to_string()),
            ..Default::default()
        };

        let err = handlers::list_resumes(Extension(state), demo_user(), Query(query))
            .await
            .expect_err("invalid status is rejected");
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_archive_handler_confirms_and_mutates() {
        let state = app_state();

        let response = handlers::archive_resume(
            Extension(state.clone()),
            demo_user(),
            Path("R_8MWQT2".to_string()),
        )
        .await
        .expect("existing id archives");

        assert_eq!(response.0["message"], "Resume archived successfully");
        assert_eq!(response.0["status"], "archived");

        let guard = state.read().await;
        assert_eq!(
            guard.store.get("R_8MWQT2").unwrap().status,
            ResumeStatus::Archived
        );
    }

    #[tokio::test]
    async fn test_archive_handler_not_found() {
        let state = app_state();

        let err = handlers::archive_resume(
            Extension(state.clone()),
            demo_user(),
            Path("R_MISSNG".to_string()),
        )
        .await
        .expect_err("absent id is not found");

        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(state.read().await.store.len(), 6);
    }

    #[tokio::test]
    async fn test_delete_handler_removes_record() {
        let state = app_state();

        let response = handlers::delete_resume(
            Extension(state.clone()),
            demo_user(),
            Path("R_9XCW41".to_string()),
        )
        .await
        .expect("existing id deletes");

        assert_eq!(response.0["message"], "Resume deleted successfully");

        let guard = state.read().await;
        assert_eq!(guard.store.len(), 5);
        assert!(guard.store.get("R_9XCW41").is_none());
    }

    #[tokio::test]
    async fn test_share_handler_denied_clipboard_is_non_fatal() {
        let state = app_state();

        let response = handlers::share_resume(
            Extension(state.clone()),
            demo_user(),
            Path("R_7F3K2M".to_string()),
        )
        .await
        .expect("share succeeds even without a clipboard");

        assert_eq!(response.0["copied"], false);
        assert_eq!(response.0["share_text"], "Resume ID: R_7F3K2M");
        assert_eq!(
            response.0["share_url"],
            "http://localhost:8080/api/resumes/R_7F3K2M"
        );
        assert_eq!(
            response.0["message"],
            "Share link created, clipboard unavailable"
        );

        // The collection is untouched by a share.
        assert_eq!(state.read().await.store.len(), 6);
    }

    #[tokio::test]
    async fn test_export_handler_csv_headers_and_body() {
        let state = app_state();
        let query = ExportQuery {
            status: Some("archived".to_string()),
            ..Default::default()
        };

        let response = handlers::export_resumes(Extension(state), demo_user(), Query(query))
            .await
            .expect("export succeeds")
            .into_response();

        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("text/csv")
        );
        assert_eq!(
            response
                .headers()
                .get("content-disposition")
                .and_then(|v| v.to_str().ok()),
            Some("attachment; filename=\"resumes_export.csv\"")
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Name,Email,Position,Experience,Skills,Match Score,Status"
        );
        assert_eq!(lines.len(), 2); // header + the one archived record
        assert!(lines[1].contains("\"Priya Patel\""));
    }

    #[tokio::test]
    async fn test_export_handler_rejects_unknown_format() {
        let state = app_state();
        let query = ExportQuery {
            format: Some("xlsx".to_string()),
            ..Default::default()
        };

        let err = handlers::export_resumes(Extension(state), demo_user(), Query(query))
            .await
            .map(|_| ())
            .expect_err("unknown format is rejected");
        assert!(matches!(err, ApiError::ValidationError(_)));
    }
}
