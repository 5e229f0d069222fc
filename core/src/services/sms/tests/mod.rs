//! Unit tests for the send-SMS command

mod mocks;
