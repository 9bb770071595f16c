// src/auth/models.rs
//! Demo identity configuration.
//!
//! There is no credential check anywhere in this service. Requests either
//! carry an explicit X-User-Email header or fall back to the configured
//! demo identity, matching how the product demo runs without a login flow.

use std::env;

#[derive(Debug, Clone)]
pub struct DemoIdentity {
    pub enabled: bool,
    pub email: String,
}

impl DemoIdentity {
    pub fn from_env() -> Self {
        let enabled = env::var("DEMO_MODE")
            .unwrap_or_else(|_| "true".to_string())
            .to_lowercase()
            != "false";

        let email =
            env::var("DEMO_USER_EMAIL").unwrap_or_else(|_| "demo@resumedesk.dev".to_string());

        Self { enabled, email }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_identity_defaults() {
        // Save original env vars
        let original_mode = env::var("DEMO_MODE").ok();
        let original_email = env::var("DEMO_USER_EMAIL").ok();

        env::remove_var("DEMO_MODE");
        env::remove_var("DEMO_USER_EMAIL");

        let identity = DemoIdentity::from_env();
        assert!(identity.enabled, "Demo identity should default to enabled");
        assert_eq!(identity.email, "demo@resumedesk.dev");

        // Restore
        if let Some(val) = original_mode {
            env::set_var("DEMO_MODE", val);
        }
        if let Some(val) = original_email {
            env::set_var("DEMO_USER_EMAIL", val);
        }
    }
}
