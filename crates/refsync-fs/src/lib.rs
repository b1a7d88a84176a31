//! Filesystem access for the README reference synchronizer
//!
//! Provides normalized paths, text I/O with atomic writes, single-level
//! directory listing and format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
