//! Unit tests for connector error types
