//! [`TestRepo`] builder for synchronizer scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Default references directory inside a fixture repository.
pub const REFERENCES_DIR: &str = "swift-testing-expert/references";

/// A temporary repository directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use refsync_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write_readme("# Title\n");
/// repo.add_reference("a.md");
/// repo.assert_file_exists("swift-testing-expert/references/a.md");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory with an empty references
    /// directory.
    pub fn new() -> Self {
        let repo = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(repo.references_dir())
            .unwrap_or_else(|e| panic!("TestRepo::new: failed to create references dir: {e}"));
        repo
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root().join("README.md")
    }

    pub fn references_dir(&self) -> PathBuf {
        self.root().join(REFERENCES_DIR)
    }

    pub fn write_readme(&self, content: &str) {
        fs::write(self.readme_path(), content)
            .unwrap_or_else(|e| panic!("TestRepo::write_readme: {e}"));
    }

    pub fn read_readme(&self) -> String {
        fs::read_to_string(self.readme_path())
            .unwrap_or_else(|e| panic!("TestRepo::read_readme: {e}"))
    }

    /// Modification time of the README, for asserting that no write happened.
    pub fn readme_modified(&self) -> SystemTime {
        fs::metadata(self.readme_path())
            .and_then(|m| m.modified())
            .unwrap_or_else(|e| panic!("TestRepo::readme_modified: {e}"))
    }

    /// Create an empty file in the references directory.
    pub fn add_reference(&self, name: &str) {
        fs::write(self.references_dir().join(name), format!("# {name}\n"))
            .unwrap_or_else(|e| panic!("TestRepo::add_reference({name}): {e}"));
    }

    /// Write an arbitrary file relative to the root.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap_or_else(|e| panic!("TestRepo::write_file({rel}): {e}"));
    }

    /// Assert that a file exists relative to the root.
    pub fn assert_file_exists(&self, rel: &str) {
        let path = self.root().join(rel);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that the README contains `needle`.
    pub fn assert_readme_contains(&self, needle: &str) {
        let content = self.read_readme();
        assert!(
            content.contains(needle),
            "Expected README to contain {needle:?}, got:\n{content}"
        );
    }
}
