//! The reference block synchronizer.

use similar::TextDiff;

use refsync_blocks::{DescriptionPattern, extract_descriptions, locate_markers, render_block};
use refsync_fs::NormalizedPath;

use crate::{DirectoryLister, DocumentStore, Error, Result, SyncConfig};
use crate::store::{FsDirectoryLister, FsDocumentStore};

/// Whether a run may write the README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Persist the rebuilt README when it differs.
    Write,
    /// Compute the rebuilt README but never write it.
    Preview,
}

/// One line of the rebuilt listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub name: String,
    /// Description carried over from the previous block.
    pub description: Option<String>,
}

/// Outcome of a synchronizer run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub readme: NormalizedPath,
    /// Reference files in rendered order.
    pub references: Vec<ReferenceEntry>,
    /// Described files from the previous block that are no longer on disk.
    pub dropped: Vec<String>,
    pub original: String,
    pub updated: String,
    /// Whether the README was rewritten by this run.
    pub written: bool,
}

impl SyncReport {
    pub fn is_changed(&self) -> bool {
        self.original != self.updated
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.references.iter().map(|r| r.name.as_str()).collect()
    }

    /// Unified diff from the README on disk to the rebuilt one.
    ///
    /// Empty when nothing changed.
    pub fn unified_diff(&self) -> String {
        if !self.is_changed() {
            return String::new();
        }
        let old_header = format!("a/{}", self.readme);
        let new_header = format!("b/{}", self.readme);
        TextDiff::from_lines(&self.original, &self.updated)
            .unified_diff()
            .context_radius(3)
            .header(&old_header, &new_header)
            .to_string()
    }
}

/// Rebuilds the references block of one README.
pub struct Synchronizer<S, L> {
    store: S,
    lister: L,
    config: SyncConfig,
    root: NormalizedPath,
}

impl Synchronizer<FsDocumentStore, FsDirectoryLister> {
    /// Synchronizer operating on the local filesystem under `root`.
    pub fn on_disk(config: SyncConfig, root: impl Into<NormalizedPath>) -> Self {
        Self::new(FsDocumentStore, FsDirectoryLister, config, root)
    }
}

impl<S: DocumentStore, L: DirectoryLister> Synchronizer<S, L> {
    pub fn new(store: S, lister: L, config: SyncConfig, root: impl Into<NormalizedPath>) -> Self {
        Self {
            store,
            lister,
            config,
            root: root.into(),
        }
    }

    pub fn readme_path(&self) -> NormalizedPath {
        self.config.readme_path(&self.root)
    }

    pub fn references_path(&self) -> NormalizedPath {
        self.config.references_path(&self.root)
    }

    /// Run once.
    ///
    /// Reads the README, validates its markers, lists the references
    /// directory and rebuilds the block. In [`SyncMode::Write`] the README is
    /// replaced only when the rebuilt text differs from what was read.
    ///
    /// # Errors
    /// Fails before any write when the README cannot be read, its markers are
    /// missing or reversed, or the references directory cannot be listed.
    pub fn run(&self, mode: SyncMode) -> Result<SyncReport> {
        let readme = self.readme_path();
        tracing::debug!(readme = %readme, ?mode, "synchronizing references block");

        let original = self.store.read(&readme)?;
        let span = locate_markers(&original, &self.config.markers)?;

        let pattern = DescriptionPattern::new(&self.config.suffix)?;
        let descriptions = extract_descriptions(span.inner(&original), &pattern);

        let files = self.reference_files()?;
        let body = render_block(&self.config.layout, &files, &descriptions);
        let updated = span.splice(&original, &self.config.markers, &body);

        let dropped: Vec<String> = descriptions
            .names()
            .into_iter()
            .filter(|name| files.binary_search_by(|f| f.as_str().cmp(*name)).is_err())
            .map(str::to_string)
            .collect();
        for name in &dropped {
            tracing::debug!(file = %name, "description dropped, file no longer present");
        }

        let references = files
            .iter()
            .map(|name| ReferenceEntry {
                description: descriptions.get(name).map(str::to_string),
                name: name.clone(),
            })
            .collect();

        let changed = updated != original;
        let written = changed && mode == SyncMode::Write;
        if written {
            self.store.write(&readme, &updated)?;
            tracing::info!(readme = %readme, "references block updated");
        } else if changed {
            tracing::debug!(readme = %readme, "references block out of date, not writing");
        } else {
            tracing::debug!(readme = %readme, "references block up to date");
        }

        Ok(SyncReport {
            readme,
            references,
            dropped,
            original,
            updated,
            written,
        })
    }

    /// Names in the references directory carrying the configured suffix,
    /// sorted byte-wise.
    pub fn reference_files(&self) -> Result<Vec<String>> {
        let dir = self.references_path();
        let names = self.lister.list(&dir).map_err(|e| match e {
            Error::Fs(source) => Error::ReferencesUnreadable {
                path: dir.to_native(),
                source,
            },
            other => other,
        })?;

        let mut files: Vec<String> = names
            .into_iter()
            .filter(|name| name.ends_with(&self.config.suffix))
            .collect();
        files.sort();
        tracing::debug!(dir = %dir, count = files.len(), "listed reference files");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryLister, MemoryStore};
    use pretty_assertions::assert_eq;

    const REFS: &str = "swift-testing-expert/references";

    fn readme(listing: &str) -> String {
        format!(
            "# Title\n\n<!-- references-structure:start -->\n```text\nswift-testing-expert/\n SKILL.md\n references/\n{listing}```\n<!-- references-structure:end -->\n"
        )
    }

    #[test]
    fn test_reference_files_filtered_and_sorted() {
        let store = MemoryStore::new();
        let lister = MemoryLister::new();
        lister.insert(REFS, ["zeta.md", "Beta.md", "alpha.md", "notes.txt", "md"]);

        let sync = Synchronizer::new(&store, &lister, SyncConfig::default(), ".");

        assert_eq!(
            sync.reference_files().unwrap(),
            vec!["Beta.md", "alpha.md", "zeta.md"]
        );
    }

    #[test]
    fn test_preview_never_writes() {
        let store = MemoryStore::new();
        store.insert("README.md", readme(" a.md - Alpha\n"));
        let lister = MemoryLister::new();
        lister.insert(REFS, ["a.md", "b.md"]);

        let sync = Synchronizer::new(&store, &lister, SyncConfig::default(), ".");
        let report = sync.run(SyncMode::Preview).unwrap();

        assert!(report.is_changed());
        assert!(!report.written);
        assert_eq!(store.writes(), 0);
        assert_eq!(report.updated, readme(" a.md - Alpha\n b.md\n"));
    }

    #[test]
    fn test_report_entries_and_dropped() {
        let store = MemoryStore::new();
        store.insert("README.md", readme(" a.md - Alpha\n old.md - Gone\n"));
        let lister = MemoryLister::new();
        lister.insert(REFS, ["b.md", "a.md"]);

        let sync = Synchronizer::new(&store, &lister, SyncConfig::default(), ".");
        let report = sync.run(SyncMode::Write).unwrap();

        assert_eq!(
            report.references,
            vec![
                ReferenceEntry {
                    name: "a.md".into(),
                    description: Some("Alpha".into()),
                },
                ReferenceEntry {
                    name: "b.md".into(),
                    description: None,
                },
            ]
        );
        assert_eq!(report.dropped, vec!["old.md".to_string()]);
    }

    #[test]
    fn test_unified_diff_shows_added_line() {
        let store = MemoryStore::new();
        store.insert("README.md", readme(""));
        let lister = MemoryLister::new();
        lister.insert(REFS, ["a.md"]);

        let sync = Synchronizer::new(&store, &lister, SyncConfig::default(), ".");
        let report = sync.run(SyncMode::Preview).unwrap();
        let diff = report.unified_diff();

        assert!(diff.contains("--- a/README.md"));
        assert!(diff.contains("+++ b/README.md"));
        assert!(diff.contains("+ a.md\n"));
    }

    #[test]
    fn test_unified_diff_empty_when_unchanged() {
        let store = MemoryStore::new();
        store.insert("README.md", readme(" a.md\n"));
        let lister = MemoryLister::new();
        lister.insert(REFS, ["a.md"]);

        let sync = Synchronizer::new(&store, &lister, SyncConfig::default(), ".");
        let report = sync.run(SyncMode::Write).unwrap();

        assert!(!report.is_changed());
        assert_eq!(report.unified_diff(), "");
    }
}
