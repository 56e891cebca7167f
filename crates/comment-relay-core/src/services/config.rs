/// Relay configuration - loaded once from environment variables at cold start
use crate::constants::{
    DEFAULT_SUBJECT, ENV_ADMIN_EMAIL, ENV_CORS_ENABLED, ENV_FROM_EMAIL, ENV_REGION, ENV_SUBJECT,
};
use crate::error::RelayError;
use crate::utils::validation::validate_email_address;

/// Immutable configuration shared by every invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Recipient of every relayed comment
    pub admin_email: String,
    /// Verified SES sender identity
    pub from_email: String,
    /// SES region, e.g. `us-east-1`
    pub region: String,
    pub subject: String,
    /// Attach `Access-Control-*` headers to every response
    pub cors_enabled: bool,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RelayError::Config(format!("Missing {} env var", key)))
        };

        let config = Self {
            admin_email: required(ENV_ADMIN_EMAIL)?,
            from_email: required(ENV_FROM_EMAIL)?,
            region: required(ENV_REGION)?,
            subject: lookup(ENV_SUBJECT)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            cors_enabled: lookup(ENV_CORS_ENABLED)
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        };

        config.validate()?;

        tracing::info!(
            region = %config.region,
            cors_enabled = config.cors_enabled,
            "Configuration validated successfully"
        );

        Ok(config)
    }

    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.region.trim().is_empty() {
            return Err(RelayError::Config("Region not configured".to_string()));
        }

        let invalid = |key: &str, err: RelayError| match err {
            RelayError::Validation(reason) => RelayError::Config(format!("{}: {}", key, reason)),
            other => other,
        };

        validate_email_address(&self.admin_email).map_err(|e| invalid(ENV_ADMIN_EMAIL, e))?;
        validate_email_address(&self.from_email).map_err(|e| invalid(ENV_FROM_EMAIL, e))?;

        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
