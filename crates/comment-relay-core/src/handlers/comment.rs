/// Comment relay handler - turns one invocation event into one response
use crate::constants::{
    MISSING_COMMENT_MESSAGE, PREFLIGHT_MESSAGE, SEND_FAILED_PREFIX, SENT_MESSAGE,
};
use crate::error::RelayError;
use crate::models::{ApiResponse, InboundEvent, OutgoingEmail};
use crate::services::{EmailSender, RelayConfig};
use crate::utils::logging::{comment_preview_context, redact_email};
use crate::utils::validation::is_blank;
use tracing::{error, info, warn};

/// Handles a single invocation
///
/// Every branch produces exactly one response; errors from the email
/// sender are reported in the response and never propagated.
pub async fn handle(
    config: &RelayConfig,
    sender: &dyn EmailSender,
    event: &InboundEvent,
) -> ApiResponse {
    info!(
        method = event.method().unwrap_or("<none>"),
        "Received comment relay event"
    );

    // Preflight replies always carry the CORS headers the browser asks for
    if event.is_preflight() {
        info!("Answering CORS preflight request");
        return ApiResponse::ok(PREFLIGHT_MESSAGE, true);
    }

    match relay_comment(config, sender, event).await {
        Ok(message_id) => {
            info!(message_id = %message_id, "Comment relayed to admin");
            ApiResponse::ok(SENT_MESSAGE, config.cors_enabled)
        }
        Err(err) => error_response(&err, config.cors_enabled),
    }
}

async fn relay_comment(
    config: &RelayConfig,
    sender: &dyn EmailSender,
    event: &InboundEvent,
) -> Result<String, RelayError> {
    let comment = event
        .comment()
        .filter(|c| !is_blank(c))
        .ok_or_else(|| RelayError::Validation(MISSING_COMMENT_MESSAGE.to_string()))?;

    info!(
        comment = %comment_preview_context(&comment),
        from = %redact_email(&config.from_email),
        to = %redact_email(&config.admin_email),
        region = %config.region,
        "Preparing to send comment email"
    );

    let email = OutgoingEmail::builder()
        .from(config.from_email.as_str())
        .to(config.admin_email.as_str())
        .subject(config.subject.as_str())
        .body_text(comment)
        .build();

    sender.send_email(&email).await
}

fn error_response(err: &RelayError, cors_enabled: bool) -> ApiResponse {
    let message = match err {
        RelayError::Validation(msg) => {
            warn!(reason = %msg, "Rejecting request without a usable comment");
            msg.clone()
        }
        RelayError::Delivery { kind, .. } => {
            let error_type = if err.is_retriable() {
                "retriable"
            } else {
                "permanent"
            };

            error!(
                target: "error_handling",
                error_type = error_type,
                kind = kind.as_str(),
                error = %redact_email(&err.to_string()),
                "Failed to send comment email"
            );
            format!("{}{}", SEND_FAILED_PREFIX, err)
        }
        RelayError::Config(_) => {
            error!(target: "error_handling", error = %err, "Relay is misconfigured");
            format!("{}{}", SEND_FAILED_PREFIX, err)
        }
    };

    ApiResponse::from_error(err, message, cors_enabled)
}
