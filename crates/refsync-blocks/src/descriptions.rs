//! Recovery of human-written descriptions from a previously rendered block.
//!
//! Parsing is best-effort: each line either matches the
//! `<name><suffix> - <description>` shape or is ignored.

use std::collections::HashMap;

use regex::Regex;

use crate::error::Result;

/// Compiled line matcher for `filename - description` entries.
#[derive(Debug, Clone)]
pub struct DescriptionPattern {
    regex: Regex,
}

impl DescriptionPattern {
    /// Build a matcher for file names ending in `suffix` (e.g. `.md`).
    ///
    /// The stem is restricted to ASCII alphanumerics, `_` and `-`. The
    /// separator is the first whitespace-hyphen-whitespace run after the
    /// name, so descriptions may themselves contain ` - `.
    pub fn new(suffix: &str) -> Result<Self> {
        let pattern = format!(
            r"^\s*([A-Za-z0-9_-]+{})\s+-\s+(.*)$",
            regex::escape(suffix)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Match one line, returning `(filename, trimmed description)`.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.regex.captures(line)?;
        let name = caps.get(1)?.as_str();
        let description = caps.get(2)?.as_str().trim();
        Some((name, description))
    }
}

/// Descriptions recovered from the previous block, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptions {
    entries: HashMap<String, String>,
}

impl Descriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a description; a later insert for the same name wins.
    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.entries.insert(name.into(), description.into());
    }

    /// The recovered description for `name`, if it is non-empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .map(String::as_str)
            .filter(|d| !d.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded file names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Collect descriptions from the text between the markers.
///
/// # Example
/// ```
/// use refsync_blocks::descriptions::{DescriptionPattern, extract_descriptions};
///
/// let pattern = DescriptionPattern::new(".md").unwrap();
/// let body = "```text\n references/\n a.md - Alpha\n b.md\n```";
/// let found = extract_descriptions(body, &pattern);
/// assert_eq!(found.get("a.md"), Some("Alpha"));
/// assert_eq!(found.get("b.md"), None);
/// ```
pub fn extract_descriptions(block: &str, pattern: &DescriptionPattern) -> Descriptions {
    let mut descriptions = Descriptions::new();
    for line in block.split('\n') {
        if let Some((name, description)) = pattern.match_line(line) {
            descriptions.insert(name, description);
        }
    }
    tracing::debug!(count = descriptions.len(), "recovered prior descriptions");
    descriptions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn md() -> DescriptionPattern {
        DescriptionPattern::new(".md").unwrap()
    }

    #[rstest]
    #[case(" a.md - Alpha", Some(("a.md", "Alpha")))]
    #[case("a.md - Alpha", Some(("a.md", "Alpha")))]
    #[case("\t  setup_guide-2.md  -   Getting started  ", Some(("setup_guide-2.md", "Getting started")))]
    #[case(" a.md - Alpha\r", Some(("a.md", "Alpha")))]
    #[case(" a.md - x - y", Some(("a.md", "x - y")))]
    #[case(" a.md", None)]
    #[case(" a.md -Alpha", None)]
    #[case(" a.md- Alpha", None)]
    #[case(" a b.md - Alpha", None)]
    #[case(" notes.txt - Alpha", None)]
    #[case(" references/", None)]
    #[case("```text", None)]
    fn test_match_line(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(md().match_line(line), expected);
    }

    #[test]
    fn test_suffix_is_escaped() {
        let pattern = md();
        assert_eq!(pattern.match_line(" amd - x"), None);
        assert_eq!(pattern.match_line(" a_md - x"), None);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let body = " a.md - First\n a.md - Second\n";
        let found = extract_descriptions(body, &md());
        assert_eq!(found.len(), 1);
        assert_eq!(found.get("a.md"), Some("Second"));
    }

    #[test]
    fn test_empty_description_is_absent() {
        let mut found = Descriptions::new();
        found.insert("a.md", "");
        assert!(found.contains("a.md"));
        assert_eq!(found.get("a.md"), None);
    }

    #[test]
    fn test_garbage_contributes_nothing() {
        let found = extract_descriptions("%%% not a listing\n\n- - -\n", &md());
        assert!(found.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let found = extract_descriptions(" b.md - B\n a.md - A\n", &md());
        assert_eq!(found.names(), vec!["a.md", "b.md"]);
    }
}
