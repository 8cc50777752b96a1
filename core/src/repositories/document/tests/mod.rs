//! Tests for the document store contract
