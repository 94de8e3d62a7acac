//! Integration tests for card-check.
//!
//! These tests drive full card check runs against mock and real filesystems.

pub mod output_tests;
