// Application state shared across all modules

use crate::auth::models::DemoIdentity;
use crate::resumes::store::ResumeStore;
use crate::services::ClipboardService;

/// Application state containing the resume collection and configuration
///
/// The collection is owned exclusively by this state; handlers reach it
/// through an `Arc<RwLock<AppState>>` extension, taking the write lock for
/// the full duration of any mutation so archive/delete stay atomic.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    pub share_base_url: String,
    pub demo_identity: DemoIdentity,
    pub clipboard: ClipboardService,
}
