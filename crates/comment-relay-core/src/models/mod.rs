/// Data models for the comment relay
pub mod email;
pub mod event;
pub mod response;

// Re-export commonly used types
pub use email::*;
pub use event::*;
pub use response::*;
