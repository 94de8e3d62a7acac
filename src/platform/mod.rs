//! Platform abstraction layer.
//!
//! Provides injectable interfaces for:
//! - Filesystem access (read, write, remove)
//! - Sleeping during the progress display

pub mod clock;
pub mod fs;
