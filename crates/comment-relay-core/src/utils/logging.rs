/// Logging utilities for PII redaction
///
/// Comments are user-submitted free text and addresses identify people, so
/// neither is written to the logs verbatim.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
        .expect("email pattern is valid")
});

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use comment_relay_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("admin@example.com"), "***@example.com");
/// assert_eq!(redact_email("Sent to ops@acme.com"), "Sent to ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Builds a safe log preview of a comment (truncates and masks)
///
/// Shows first few characters for debugging but hides content
///
/// # Examples
/// ```
/// use comment_relay_core::utils::logging::comment_preview_context;
///
/// assert_eq!(comment_preview_context("Great site, thanks!"), "Gre...[19 chars]");
/// assert_eq!(comment_preview_context("Hi"), "[2 chars]");
/// ```
pub fn comment_preview_context(comment: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_PREVIEW: usize = 6;

    let chars = comment.chars().count();
    if chars < MIN_LENGTH_TO_PREVIEW {
        format!("[{} chars]", chars)
    } else {
        let preview: String = comment.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", preview, chars)
    }
}
