//! Filesystem capability.
//!
//! The validator touches the filesystem only through this trait: reading the
//! card, writing the card value, and removing a rejected card. Tests swap in
//! an in-memory implementation.
//!
//! # Graceful Degradation
//!
//! Implementations return `io::Result` and never panic. The validator decides
//! which failures are fatal:
//! - Read failure: reported as a missing card
//! - Write failure: logged, run continues
//! - Remove failure: logged, run continues

use std::fs;
use std::io;
use std::path::Path;

/// File operations needed by a card check run
pub trait FileSystem {
    /// Read the whole file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file and write `contents`
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Remove the file
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Local disk via `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
