/// Error types for the comment relay
use thiserror::Error;

/// Why SES refused to deliver the comment email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryErrorKind {
    /// Message rejected by SES policy (content or spam filtering)
    Rejected,
    /// The sender identity or MAIL FROM domain is not verified
    SenderNotVerified,
    /// Configuration set missing or paused, or account sending paused
    ConfigurationMismatch,
    /// Transport or otherwise unexpected failure
    Other,
}

impl DeliveryErrorKind {
    /// Description prefix placed in front of the SES detail
    pub fn description(&self) -> &'static str {
        match self {
            Self::Rejected => "SES rejected the message",
            Self::SenderNotVerified => "FROM_EMAIL domain is not verified in SES",
            Self::ConfigurationMismatch => "SES configuration set issue",
            Self::Other => "Unexpected SES error",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::SenderNotVerified => "sender_not_verified",
            Self::ConfigurationMismatch => "configuration_mismatch",
            Self::Other => "other",
        }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}: {detail}", .kind.description())]
    Delivery {
        kind: DeliveryErrorKind,
        detail: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelayError {
    pub fn delivery(kind: DeliveryErrorKind, detail: impl Into<String>) -> Self {
        Self::Delivery {
            kind,
            detail: detail.into(),
        }
    }

    /// HTTP status code reported to the caller for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Delivery { .. } => 500,
            Self::Config(_) => 500,
        }
    }

    /// Determines if an error is retriable
    ///
    /// Only used to classify log lines; the handler never retries.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Delivery { kind, .. } => matches!(kind, DeliveryErrorKind::Other),
            Self::Config(_) => false,
        }
    }
}
