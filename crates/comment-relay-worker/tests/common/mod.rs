//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_ses;
pub mod test_data;

use comment_relay_worker::{RelayConfig, WorkerContext};
use mock_ses::MockSes;
use std::sync::Arc;

pub fn test_config() -> RelayConfig {
    RelayConfig {
        admin_email: "admin@acme.com".to_string(),
        from_email: "noreply@acme.com".to_string(),
        region: "us-east-1".to_string(),
        subject: "New User Comment".to_string(),
        cors_enabled: true,
    }
}

/// Builds a worker context around the given mock sender
pub fn context_with(ses: &MockSes) -> Arc<WorkerContext> {
    WorkerContext::new(test_config(), Arc::new(ses.clone()))
}
