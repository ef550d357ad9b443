//! Pattern 2: Lazy Filesystem Sequences
//!
//! A file's content as a one-element lazy sequence: nothing is read at
//! construction, the first request performs the read, and the sequence is
//! exhausted afterwards.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Single-shot sequence over a file's full content.
///
/// The first `next` reads the whole file and yields exactly one element —
/// the content as text, or the I/O error for a missing or unreadable path.
/// Every later call returns `None`.
pub struct FileContent {
    path: Option<PathBuf>,
}

impl FileContent {
    /// No I/O happens here; the path is only touched on the first `next`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileContent {
            path: Some(path.into()),
        }
    }
}

impl Iterator for FileContent {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.path.take()?;
        Some(fs::read_to_string(path))
    }
}
