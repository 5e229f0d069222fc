//! Domain entities produced and consumed by the send-SMS command.

pub mod command_result;
pub mod message;

// Re-export commonly used types
pub use command_result::{CommandResult, SmsDelivery, SmsFailure, STATUS_OK};
pub use message::{AccountInfo, MessageReceipt, OutboundMessage, ACCOUNT_STATUS_ACTIVE};
