/// SES email sending service
use crate::constants::EMAIL_CHARSET;
use crate::error::{DeliveryErrorKind, RelayError};
use crate::models::OutgoingEmail;
use async_trait::async_trait;
use aws_sdk_ses::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ses::operation::send_email::SendEmailError;
use aws_sdk_ses::types::{Body, Content, Destination, Message};

/// The one capability the relay needs from the email backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends a plain-text email, returning the provider message id
    async fn send_email(&self, email: &OutgoingEmail) -> Result<String, RelayError>;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }

    /// Creates a sender whose SES client targets `region`
    pub async fn for_region(region: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_ses::config::Region::new(region.to_string()))
            .load()
            .await;

        Self::new(aws_sdk_ses::Client::new(&sdk_config))
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<String, RelayError> {
        let subject = utf8_content(&email.subject)?;
        let text = utf8_content(&email.body_text)?;

        let message = Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build();

        let response = self
            .client
            .send_email()
            .source(&email.from)
            .destination(Destination::builder().to_addresses(&email.to).build())
            .message(message)
            .send()
            .await
            .map_err(|e| classify_send_error(&e.into_service_error()))?;

        let message_id = response.message_id;

        tracing::info!(message_id = %message_id, "Sent email via SES");
        Ok(message_id)
    }
}

fn utf8_content(data: &str) -> Result<Content, RelayError> {
    Content::builder()
        .data(data)
        .charset(EMAIL_CHARSET)
        .build()
        .map_err(|e| RelayError::delivery(DeliveryErrorKind::Other, e.to_string()))
}

/// Maps an SES `SendEmail` failure onto the relay's delivery taxonomy
pub fn classify_send_error(err: &SendEmailError) -> RelayError {
    let (kind, message) = match err {
        SendEmailError::MessageRejected(e) => (DeliveryErrorKind::Rejected, e.message()),
        SendEmailError::MailFromDomainNotVerifiedException(e) => {
            (DeliveryErrorKind::SenderNotVerified, e.message())
        }
        SendEmailError::ConfigurationSetDoesNotExistException(e) => {
            (DeliveryErrorKind::ConfigurationMismatch, e.message())
        }
        SendEmailError::ConfigurationSetSendingPausedException(e) => {
            (DeliveryErrorKind::ConfigurationMismatch, e.message())
        }
        SendEmailError::AccountSendingPausedException(e) => {
            (DeliveryErrorKind::ConfigurationMismatch, e.message())
        }
        other => (DeliveryErrorKind::Other, ProvideErrorMetadata::message(other)),
    };

    let detail = message
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string());

    RelayError::delivery(kind, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ses::types::error::{
        AccountSendingPausedException, ConfigurationSetDoesNotExistException,
        MailFromDomainNotVerifiedException, MessageRejected,
    };

    fn kind_of(err: &RelayError) -> Option<DeliveryErrorKind> {
        match err {
            RelayError::Delivery { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    #[test]
    fn test_classify_message_rejected() {
        let err = SendEmailError::MessageRejected(
            MessageRejected::builder().message("blocked").build(),
        );
        let relay_err = classify_send_error(&err);

        assert_eq!(kind_of(&relay_err), Some(DeliveryErrorKind::Rejected));
        assert_eq!(relay_err.to_string(), "SES rejected the message: blocked");
    }

    #[test]
    fn test_classify_sender_not_verified() {
        let err = SendEmailError::MailFromDomainNotVerifiedException(
            MailFromDomainNotVerifiedException::builder()
                .message("acme.com")
                .build(),
        );
        let relay_err = classify_send_error(&err);

        assert_eq!(kind_of(&relay_err), Some(DeliveryErrorKind::SenderNotVerified));
        assert!(relay_err.to_string().contains("acme.com"));
    }

    #[test]
    fn test_classify_configuration_errors() {
        let missing = SendEmailError::ConfigurationSetDoesNotExistException(
            ConfigurationSetDoesNotExistException::builder()
                .message("no such set")
                .build(),
        );
        let paused = SendEmailError::AccountSendingPausedException(
            AccountSendingPausedException::builder()
                .message("paused")
                .build(),
        );

        for err in [missing, paused] {
            assert_eq!(
                kind_of(&classify_send_error(&err)),
                Some(DeliveryErrorKind::ConfigurationMismatch)
            );
        }
    }

    #[test]
    fn test_classify_missing_detail_falls_back_to_display() {
        let err = SendEmailError::MessageRejected(MessageRejected::builder().build());
        let relay_err = classify_send_error(&err);

        assert_eq!(kind_of(&relay_err), Some(DeliveryErrorKind::Rejected));
        assert!(relay_err.to_string().starts_with("SES rejected the message: "));
    }
}
