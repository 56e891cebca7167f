/// Comment Relay Core - request handling for the comment relay Lambda
///
/// This crate contains the event model, response shaping, configuration and
/// the SES email sender used by the comment relay worker.
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{DeliveryErrorKind, RelayError};
pub use handlers::comment::handle;
pub use models::{ApiResponse, InboundEvent, OutgoingEmail};
pub use services::{EmailSender, RelayConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
