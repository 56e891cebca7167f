/// Recording SES stand-in for integration testing
use async_trait::async_trait;
use comment_relay_worker::{DeliveryErrorKind, EmailSender, OutgoingEmail, RelayError};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockSes {
    pub sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
    failure: Option<(DeliveryErrorKind, String)>,
}

impl MockSes {
    /// A sender that accepts every email
    pub fn new() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// A sender that fails every attempt with the given kind and detail
    pub fn failing(kind: DeliveryErrorKind, detail: &str) -> Self {
        Self {
            failure: Some((kind, detail.to_string())),
            ..Self::new()
        }
    }

    pub fn get_sent_count(&self) -> usize {
        self.sent_emails.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<OutgoingEmail> {
        self.sent_emails.lock().unwrap().last().cloned()
    }
}

impl Default for MockSes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockSes {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<String, RelayError> {
        self.sent_emails.lock().unwrap().push(email.clone());

        match &self.failure {
            Some((kind, detail)) => Err(RelayError::delivery(*kind, detail.clone())),
            None => Ok(format!("mock-message-{}", self.get_sent_count())),
        }
    }
}
