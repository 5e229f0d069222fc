//! Value objects representing immutable domain concepts.

pub mod config_value;
pub mod credentials;
pub mod phone_number;

// Re-export commonly used types
pub use config_value::{ConfigSource, ConfigValue};
pub use credentials::Credentials;
pub use phone_number::PhoneNumber;
