/// Application constants
///
/// Fixed response messages, header values and environment variable names.
// ============================================================================
// Response Messages
// ============================================================================
/// Returned for a CORS preflight request
pub const PREFLIGHT_MESSAGE: &str = "CORS preflight OK";

/// Returned when no usable comment could be extracted from the event
pub const MISSING_COMMENT_MESSAGE: &str = "Missing or empty 'comment' field in request body.";

/// Returned after the comment email was accepted by SES
pub const SENT_MESSAGE: &str = "Comment sent successfully to admin.";

/// Prefix for delivery failures, followed by the failure description
pub const SEND_FAILED_PREFIX: &str = "Failed to send comment. ";

// ============================================================================
// Email Constants
// ============================================================================

/// Default subject of the relayed comment email
pub const DEFAULT_SUBJECT: &str = "New User Comment";

/// Charset declared for subject and body content
pub const EMAIL_CHARSET: &str = "UTF-8";

// ============================================================================
// HTTP Constants
// ============================================================================

/// HTTP method used by browsers for preflight checks
pub const PREFLIGHT_METHOD: &str = "OPTIONS";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS_HEADER: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS_HEADER: &str = "Access-Control-Allow-Headers";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "OPTIONS,POST,GET";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_ADMIN_EMAIL: &str = "ADMIN_EMAIL";
pub const ENV_FROM_EMAIL: &str = "FROM_EMAIL";
pub const ENV_REGION: &str = "DEFAULT_REGION";
pub const ENV_SUBJECT: &str = "COMMENT_SUBJECT";
pub const ENV_CORS_ENABLED: &str = "CORS_ENABLED";
