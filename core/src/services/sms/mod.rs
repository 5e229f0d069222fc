//! Send-SMS connector command
//!
//! - Validates sender and recipient numbers (E.164)
//! - Confirms credentials with the provider when the command is created
//! - Sends one message per invocation and maps the outcome to a [`CommandResult`]
//!
//! [`CommandResult`]: crate::domain::entities::CommandResult

mod command;
mod traits;

#[cfg(test)]
mod tests;

pub use command::{validate_message_body, SendSmsCommand};
pub use traits::SmsProvider;
