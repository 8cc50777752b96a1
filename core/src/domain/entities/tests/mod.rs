//! Tests for domain entities

mod account_tests;
mod catalog_tests;
mod recruit_tests;
