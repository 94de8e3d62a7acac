//! CLI module for console output.
//!
//! The binary takes no arguments; this module renders the stdout protocol.

pub mod output;
