//! Tests for domain error types
