//! Mock implementations for testing without touching the disk.
//!
//! This module provides an in-memory filesystem with injectable failures and
//! a sleeper that records requested pauses instead of sleeping.


pub use platform::*;
