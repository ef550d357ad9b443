//! Pattern 2: Lazy Filesystem Sequences
//!
//! Recursive directory walking as a lazy iterator: paths are produced one at
//! a time, directories are only read when the walk reaches them.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Depth-first walk over every file under a root directory.
///
/// Each directory's files are yielded before the walk descends into its
/// subdirectories, and subdirectories are expanded in the order the listing
/// returns them. The root is canonicalized on the first `next`, so every
/// yielded path is absolute.
///
/// Errors are elements: an invalid root or an unreadable directory yields an
/// `Err` and the walk continues with whatever remains queued. The caller
/// decides the policy — `collect::<Result<Vec<_>, _>>()` to abort on the
/// first error, `filter_map(Result::ok)` to skip.
///
/// Known limitation: there is no cycle detection. A symbolic-link cycle
/// makes the walk non-terminating.
pub struct DirWalker {
    root: Option<PathBuf>,
    files: VecDeque<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl DirWalker {
    /// No I/O happens here; the root is first touched on `next`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirWalker {
            root: Some(root.into()),
            files: VecDeque::new(),
            dirs: Vec::new(),
        }
    }

    /// Queue a directory's files and push its subdirectories for descent.
    fn enter(&mut self, dir: &Path) -> io::Result<()> {
        let mut subdirs = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                subdirs.push(path);
            } else {
                self.files.push_back(path);
            }
        }
        // the stack pops last-first; reversing keeps listing order
        subdirs.reverse();
        self.dirs.append(&mut subdirs);
        Ok(())
    }
}

impl Iterator for DirWalker {
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.files.pop_front() {
                return Some(Ok(file));
            }
            let dir = match self.root.take() {
                Some(root) => match fs::canonicalize(&root) {
                    Ok(absolute) => absolute,
                    Err(e) => return Some(Err(e)),
                },
                None => self.dirs.pop()?,
            };
            if let Err(e) = self.enter(&dir) {
                return Some(Err(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn walks_files_and_subdirectories() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("a"), "").unwrap();
        fs::write(root.path().join("b"), "").unwrap();
        fs::create_dir(root.path().join("c")).unwrap();
        fs::write(root.path().join("c").join("d"), "").unwrap();

        let paths: Vec<PathBuf> = DirWalker::new(root.path())
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(file_names(&paths), vec!["a", "b", "d"]);
    }

    #[test]
    fn yields_absolute_paths() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("a"), "").unwrap();

        let paths: Vec<PathBuf> = DirWalker::new(root.path())
            .collect::<io::Result<_>>()
            .unwrap();

        assert!(paths.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn parent_files_come_before_subtree_files() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("top"), "").unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("sub").join("nested"), "").unwrap();

        let paths: Vec<PathBuf> = DirWalker::new(root.path())
            .collect::<io::Result<_>>()
            .unwrap();

        let top = paths.iter().position(|p| p.ends_with("top")).unwrap();
        let nested = paths.iter().position(|p| p.ends_with("nested")).unwrap();
        assert!(top < nested);
    }

    #[test]
    fn descends_multiple_levels() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("x").join("y")).unwrap();
        fs::write(root.path().join("x").join("y").join("deep"), "").unwrap();

        let paths: Vec<PathBuf> = DirWalker::new(root.path())
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(file_names(&paths), vec!["deep"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let root = tempdir().unwrap();
        assert!(DirWalker::new(root.path()).next().is_none());
    }

    #[test]
    fn missing_root_yields_single_error() {
        let mut walker = DirWalker::new("/no/such/directory");

        let err = walker.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(walker.next().is_none());
    }

    #[test]
    fn construction_does_no_io() {
        let _walker = DirWalker::new("/no/such/directory");
    }
}
