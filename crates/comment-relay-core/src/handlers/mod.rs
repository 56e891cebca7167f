/// Invocation handlers
pub mod comment;
