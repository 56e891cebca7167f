/// Worker context - resources built once per execution environment
use comment_relay_core::services::SesEmailSender;
use comment_relay_core::{EmailSender, RelayConfig, RelayError};
use std::sync::Arc;

/// Shared, read-only state reused across invocations
#[derive(Clone)]
pub struct WorkerContext {
    pub config: RelayConfig,

    /// Email collaborator (SES in production)
    pub sender: Arc<dyn EmailSender>,
}

impl WorkerContext {
    pub fn new(config: RelayConfig, sender: Arc<dyn EmailSender>) -> Arc<Self> {
        Arc::new(Self { config, sender })
    }

    /// Loads configuration from the environment and creates the SES client
    pub async fn from_env() -> Result<Arc<Self>, RelayError> {
        let config = RelayConfig::from_env()?;
        let sender = SesEmailSender::for_region(&config.region).await;

        Ok(Self::new(config, Arc::new(sender)))
    }
}
