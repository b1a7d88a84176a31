//! Block body rendering.

use serde::{Deserialize, Serialize};

use crate::descriptions::Descriptions;

/// Fixed lines framing the file listing inside the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockLayout {
    /// Opening fence line.
    pub fence_open: String,
    /// Closing fence line.
    pub fence_close: String,
    /// Top-level directory label.
    pub root_label: String,
    /// Entries listed under the root before the references label.
    pub root_entries: Vec<String>,
    /// Label of the references subdirectory.
    pub references_label: String,
    /// Prefix applied to every nested line.
    pub indent: String,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            fence_open: "```text".to_string(),
            fence_close: "```".to_string(),
            root_label: "swift-testing-expert/".to_string(),
            root_entries: vec!["SKILL.md".to_string()],
            references_label: "references/".to_string(),
            indent: " ".to_string(),
        }
    }
}

/// Render the block body for `files`, which must already be sorted.
///
/// A file with a recovered description renders as `name - description`,
/// otherwise as the bare name. Lines are joined with `\n` and the body has
/// no trailing newline.
///
/// # Example
/// ```
/// use refsync_blocks::{BlockLayout, Descriptions, render_block};
///
/// let mut descriptions = Descriptions::new();
/// descriptions.insert("a.md", "Alpha");
/// let body = render_block(&BlockLayout::default(), &["a.md", "b.md"], &descriptions);
/// assert!(body.contains("\n a.md - Alpha\n b.md\n"));
/// ```
pub fn render_block<S: AsRef<str>>(
    layout: &BlockLayout,
    files: &[S],
    descriptions: &Descriptions,
) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(files.len() + layout.root_entries.len() + 4);
    lines.push(layout.fence_open.clone());
    lines.push(layout.root_label.clone());
    for entry in &layout.root_entries {
        lines.push(format!("{}{}", layout.indent, entry));
    }
    lines.push(format!("{}{}", layout.indent, layout.references_label));

    for file in files {
        let file = file.as_ref();
        match descriptions.get(file) {
            Some(description) => lines.push(format!("{}{} - {}", layout.indent, file, description)),
            None => lines.push(format!("{}{}", layout.indent, file)),
        }
    }

    lines.push(layout.fence_close.clone());
    lines.join("\n")
}
