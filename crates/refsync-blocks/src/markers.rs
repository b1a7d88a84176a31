//! Marker location and block splicing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default opening marker for the references block.
pub const DEFAULT_START_MARKER: &str = "<!-- references-structure:start -->";

/// Default closing marker for the references block.
pub const DEFAULT_END_MARKER: &str = "<!-- references-structure:end -->";

/// The pair of exact-match literals that bound the managed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Byte offsets of the two markers inside a document.
///
/// `start` and `end` are the positions of the first occurrence of each
/// marker literal; the markers never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Offset of the first byte of the start marker.
    pub start: usize,
    /// Offset one past the last byte of the start marker.
    pub inner_start: usize,
    /// Offset of the first byte of the end marker.
    pub end: usize,
    /// Offset one past the last byte of the end marker.
    pub outer_end: usize,
}

impl BlockSpan {
    /// The text strictly between the markers.
    pub fn inner<'a>(&self, document: &'a str) -> &'a str {
        &document[self.inner_start..self.end]
    }

    /// Rebuild `document` with `body` placed between the markers.
    ///
    /// Each marker ends up on its own line around the body; text before the
    /// start marker and after the end marker is kept verbatim.
    pub fn splice(&self, document: &str, markers: &Markers, body: &str) -> String {
        let prefix = &document[..self.start];
        let suffix = &document[self.outer_end..];

        let mut out = String::with_capacity(
            prefix.len() + markers.start.len() + body.len() + markers.end.len() + suffix.len() + 2,
        );
        out.push_str(prefix);
        out.push_str(&markers.start);
        out.push('\n');
        out.push_str(body);
        out.push('\n');
        out.push_str(&markers.end);
        out.push_str(suffix);
        out
    }
}

/// Find the first occurrence of each marker in `document`.
///
/// # Errors
/// - [`Error::MissingMarker`] if either literal does not occur.
/// - [`Error::MarkersOutOfOrder`] if the end marker begins before the start
///   marker has ended.
///
/// # Example
/// ```
/// use refsync_blocks::markers::{Markers, locate_markers};
///
/// let markers = Markers::default();
/// let doc = "intro\n<!-- references-structure:start -->\nold\n<!-- references-structure:end -->\n";
/// let span = locate_markers(doc, &markers).unwrap();
/// assert_eq!(span.inner(doc), "\nold\n");
/// ```
pub fn locate_markers(document: &str, markers: &Markers) -> Result<BlockSpan> {
    let start = document
        .find(&markers.start)
        .ok_or_else(|| Error::MissingMarker {
            marker: markers.start.clone(),
        })?;
    let end = document
        .find(&markers.end)
        .ok_or_else(|| Error::MissingMarker {
            marker: markers.end.clone(),
        })?;

    let inner_start = start + markers.start.len();
    if end < inner_start {
        return Err(Error::MarkersOutOfOrder {
            start: markers.start.clone(),
            end: markers.end.clone(),
        });
    }

    let span = BlockSpan {
        start,
        inner_start,
        end,
        outer_end: end + markers.end.len(),
    };
    tracing::debug!(start = span.start, end = span.end, "located reference block");
    Ok(span)
}
