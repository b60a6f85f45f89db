//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// The tree most tests start from:
    ///
    /// ```text
    /// file1.txt
    /// dir1/file2.txt
    /// dir1/file3.py
    /// dir1/subdir1/
    /// dir2/
    /// ```
    pub fn sample() -> Self {
        let tree = Self::new();
        tree.add_file("file1.txt", "Test file 1");
        tree.add_file("dir1/file2.txt", "Test file 2");
        tree.add_file("dir1/file3.py", "print('Test file 3')");
        tree.add_dir("dir1/subdir1");
        tree.add_dir("dir2");
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a tree `depth` levels deep with `files_per_dir` files and
    /// `dirs_per_dir` subdirectories at every level.
    pub fn populate(&self, depth: usize, dirs_per_dir: usize, files_per_dir: usize) {
        fn fill(dir: &Path, depth: usize, dirs: usize, files: usize) {
            for f in 0..files {
                fs::write(dir.join(format!("file{}.txt", f)), "content")
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..dirs {
                let sub = dir.join(format!("dir{}", d));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, dirs, files);
            }
        }
        fill(self.dir.path(), depth, dirs_per_dir, files_per_dir);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
