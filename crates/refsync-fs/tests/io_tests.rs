use pretty_assertions::assert_eq;
use refsync_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("README.md"));

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_text_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("README.md");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_text(&path, "updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("README.md");
    fs::write(&file_path, "# Title\n").unwrap();

    let content = io::read_text(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(content, "# Title\n");
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.md"));

    let err = io::read_text(&path).unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    assert!(err.to_string().contains("missing.md"));
}

#[test]
fn test_io_error_message_leaves_cause_to_source() {
    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "gone away");
    let err = refsync_fs::Error::io("docs/README.md", cause);

    assert_eq!(err.to_string(), "I/O error at docs/README.md");
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "gone away");
}

#[test]
fn test_list_dir_is_single_level() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.md"), "").unwrap();
    fs::write(temp.path().join("notes.txt"), "").unwrap();
    fs::create_dir(temp.path().join("nested")).unwrap();
    fs::write(temp.path().join("nested/deep.md"), "").unwrap();

    let mut names = io::list_dir(&NormalizedPath::new(temp.path())).unwrap();
    names.sort();

    assert_eq!(names, vec!["a.md", "nested", "notes.txt"]);
}

#[test]
fn test_list_dir_missing_directory() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("references"));

    let err = io::list_dir(&path).unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
}

#[test]
fn test_canonicalize_existing_dir() {
    let temp = TempDir::new().unwrap();
    let canonical = NormalizedPath::canonicalize(temp.path()).unwrap();
    assert!(canonical.is_dir());
}
