/// Input validation utilities
use crate::error::RelayError;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex is valid")
});

pub fn validate_email_address(email: &str) -> Result<(), RelayError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(RelayError::Validation(format!(
            "Invalid email address: {}",
            email
        )))
    }
}

/// Returns true when the comment is absent or only whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
