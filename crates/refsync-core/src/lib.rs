//! README reference block synchronization engine
//!
//! Reads a README, locates the references block, rebuilds it from the
//! current references directory while keeping prior per-file descriptions,
//! and writes the README back only when the text changed.
//!
//! Filesystem access is injected through [`DocumentStore`] and
//! [`DirectoryLister`]. [`FsDocumentStore`] and [`FsDirectoryLister`] hit
//! the disk; [`MemoryStore`] and [`MemoryLister`] keep everything in memory
//! and count writes.
//!
//! # Example
//!
//! ```
//! use refsync_core::{MemoryLister, MemoryStore, SyncConfig, SyncMode, Synchronizer};
//!
//! let store = MemoryStore::new();
//! store.insert(
//!     "README.md",
//!     "<!-- references-structure:start -->\n<!-- references-structure:end -->\n",
//! );
//! let lister = MemoryLister::new();
//! lister.insert("swift-testing-expert/references", ["b.md", "a.md"]);
//!
//! let sync = Synchronizer::new(&store, &lister, SyncConfig::default(), ".");
//! let report = sync.run(SyncMode::Write).unwrap();
//!
//! assert!(report.written);
//! assert_eq!(store.writes(), 1);
//! assert_eq!(report.file_names(), vec!["a.md", "b.md"]);
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod store;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use memory::{MemoryLister, MemoryStore};
pub use store::{DirectoryLister, DocumentStore, FsDirectoryLister, FsDocumentStore};
pub use sync::{ReferenceEntry, SyncMode, SyncReport, Synchronizer};

pub use refsync_fs::NormalizedPath;
