//! Shared utilities for the Twilio connector
//!
//! This crate provides functionality used by both the core and infrastructure crates:
//! - E.164 phone number validation, normalization and masking
//! - Environment detection and logging configuration
//! - Logging bootstrap built on `tracing-subscriber`

pub mod config;
pub mod logging;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig};
pub use logging::init_logging;
pub use utils::phone;
