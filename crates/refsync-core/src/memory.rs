//! In-memory store and lister
//!
//! Used to drive the synchronizer without touching the disk. Writes are
//! counted so callers can assert that an up-to-date README is left alone.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::ErrorKind;

use refsync_fs::NormalizedPath;

use crate::{DirectoryLister, DocumentStore, Result};

fn not_found(path: &NormalizedPath) -> crate::Error {
    refsync_fs::Error::io(
        path.to_native(),
        std::io::Error::new(ErrorKind::NotFound, "no such entry in memory"),
    )
    .into()
}

/// Documents held in memory, keyed by path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<HashMap<NormalizedPath, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document without counting it as a write.
    pub fn insert(&self, path: impl Into<NormalizedPath>, content: impl Into<String>) {
        self.documents
            .borrow_mut()
            .insert(path.into(), content.into());
    }

    pub fn get(&self, path: impl Into<NormalizedPath>) -> Option<String> {
        let path: NormalizedPath = path.into();
        self.documents.borrow().get(&path).cloned()
    }

    /// Number of [`DocumentStore::write`] calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, path: &NormalizedPath) -> Result<String> {
        self.documents
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.documents
            .borrow_mut()
            .insert(path.clone(), content.to_string());
        Ok(())
    }
}

/// Directory listings held in memory, returned in insertion order.
#[derive(Debug, Default)]
pub struct MemoryLister {
    directories: RefCell<HashMap<NormalizedPath, Vec<String>>>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entries of `dir`, replacing any previous listing.
    pub fn insert<I, S>(&self, dir: impl Into<NormalizedPath>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories
            .borrow_mut()
            .insert(dir.into(), names.into_iter().map(Into::into).collect());
    }
}

impl DirectoryLister for MemoryLister {
    fn list(&self, dir: &NormalizedPath) -> Result<Vec<String>> {
        self.directories
            .borrow()
            .get(dir)
            .cloned()
            .ok_or_else(|| not_found(dir))
    }
}
