//! Tests for the auth context stub
//!
//! These verify the three resolution paths: explicit header identity,
//! demo-identity fallback, and the unauthenticated empty context.

#[cfg(test)]
mod tests {
    use axum::extract::FromRequestParts;
    use axum::http::Request;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::auth::extractors::{AuthContext, USER_EMAIL_HEADER};
    use crate::auth::models::DemoIdentity;
    use crate::common::AppState;
    use crate::resumes::{seed, ResumeStore};
    use crate::services::ClipboardService;

    fn app_state(demo_enabled: bool) -> Arc<RwLock<AppState>> {
        let store = ResumeStore::new(seed::builtin_records()).expect("valid builtin seed");
        Arc::new(RwLock::new(AppState {
            store,
            share_base_url: "http://localhost:8080".to_string(),
            demo_identity: DemoIdentity {
                enabled: demo_enabled,
                email: "demo@resumedesk.dev".to_string(),
            },
            clipboard: ClipboardService::new(false),
        }))
    }

    async fn resolve(state: Arc<RwLock<AppState>>, header_email: Option<&str>) -> AuthContext {
        let mut builder = Request::builder().uri("/api/resumes");
        if let Some(email) = header_email {
            builder = builder.header(USER_EMAIL_HEADER, email);
        }
        let mut request = builder.body(()).unwrap();
        request.extensions_mut().insert(state);
        let (mut parts, _) = request.into_parts();

        AuthContext::from_request_parts(&mut parts, &())
            .await
            .expect("auth context extraction never rejects")
    }

    #[tokio::test]
    async fn test_header_identity_wins() {
        let context = resolve(app_state(true), Some("recruiter@example.com")).await;
        assert!(context.is_authenticated);
        assert_eq!(context.email, "recruiter@example.com");
    }

    #[tokio::test]
    async fn test_demo_identity_fallback() {
        let context = resolve(app_state(true), None).await;
        assert!(context.is_authenticated);
        assert_eq!(context.email, "demo@resumedesk.dev");
    }

    #[tokio::test]
    async fn test_unauthenticated_when_demo_disabled() {
        let context = resolve(app_state(false), None).await;
        assert!(!context.is_authenticated);
        assert!(context.email.is_empty());
    }

    #[tokio::test]
    async fn test_blank_header_treated_as_absent() {
        let context = resolve(app_state(true), Some("   ")).await;
        assert!(context.is_authenticated);
        assert_eq!(context.email, "demo@resumedesk.dev");
    }
}
