//! Reference block parsing and rendering.
//!
//! A README carries one managed block bounded by two HTML-comment markers:
//!
//! ````text
//! <!-- references-structure:start -->
//! ```text
//! swift-testing-expert/
//!  SKILL.md
//!  references/
//!  a.md - Description kept from the previous run
//!  b.md
//! ```
//! <!-- references-structure:end -->
//! ````
//!
//! Everything here is pure text manipulation:
//!
//! - [`markers`] locates the block and splices a new body into the document
//! - [`descriptions`] recovers `filename - description` pairs from the old body
//! - [`render`] rebuilds the body from a sorted file list
//!
//! Missing or reversed markers are errors. Unrecognized lines inside the
//! block are not; they simply contribute no description.

pub mod descriptions;
pub mod error;
pub mod markers;
pub mod render;

pub use descriptions::{DescriptionPattern, Descriptions, extract_descriptions};
pub use error::{Error, Result};
pub use markers::{BlockSpan, Markers, locate_markers};
pub use render::{BlockLayout, render_block};
