/// Configuration and the SES email collaborator
pub mod config;
pub mod ses;

pub use config::RelayConfig;
pub use ses::{EmailSender, SesEmailSender};
