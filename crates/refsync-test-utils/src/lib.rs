//! Shared test fixtures for the refsync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`repo`]: [`repo::TestRepo`], a temporary repository with a README and
//!   a references directory

pub mod repo;

/// Opening marker used by every fixture README.
pub const START_MARKER: &str = "<!-- references-structure:start -->";

/// Closing marker used by every fixture README.
pub const END_MARKER: &str = "<!-- references-structure:end -->";

/// README text with a rendered block listing `lines` verbatim.
///
/// Each entry of `lines` becomes one ` <line>` row under `references/`.
pub fn readme_with_listing(lines: &[&str]) -> String {
    let mut listing = String::new();
    for line in lines {
        listing.push(' ');
        listing.push_str(line);
        listing.push('\n');
    }
    format!(
        "# Swift Testing Expert\n\nIntro text.\n\n{START_MARKER}\n```text\nswift-testing-expert/\n SKILL.md\n references/\n{listing}```\n{END_MARKER}\n\n## Footer\n"
    )
}
