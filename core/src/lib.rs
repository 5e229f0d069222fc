//! # Connector Twilio Core
//!
//! Core domain layer of the Twilio SMS connector.
//! This crate contains the send-SMS command invoked by the workflow engine,
//! the provider contract it calls through, the result record it returns and
//! the error types that tie them together. Concrete provider clients live in
//! `ct_infra`.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
