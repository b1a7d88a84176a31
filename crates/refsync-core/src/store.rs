//! Filesystem seams used by the synchronizer

use refsync_fs::{NormalizedPath, io};

use crate::Result;

/// Reads and replaces whole text documents.
pub trait DocumentStore {
    fn read(&self, path: &NormalizedPath) -> Result<String>;

    /// Replace the document at `path` in full.
    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()>;
}

/// Lists entry names directly under one directory.
pub trait DirectoryLister {
    fn list(&self, dir: &NormalizedPath) -> Result<Vec<String>>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn read(&self, path: &NormalizedPath) -> Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        (**self).write(path, content)
    }
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn list(&self, dir: &NormalizedPath) -> Result<Vec<String>> {
        (**self).list(dir)
    }
}

/// [`DocumentStore`] backed by the local filesystem with atomic writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    fn read(&self, path: &NormalizedPath) -> Result<String> {
        Ok(io::read_text(path)?)
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        Ok(io::write_text(path, content)?)
    }
}

/// [`DirectoryLister`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, dir: &NormalizedPath) -> Result<Vec<String>> {
        Ok(io::list_dir(dir)?)
    }
}
