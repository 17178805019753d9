//! Release Notes Extraction
//!
//! Pulls the section for one release out of a heading-per-release changelog,
//! for use in release pipelines (e.g. as the body of a GitHub release).
//!
//! # Usage
//!
//! ```rust
//! use release_notes::{extract_from_str, version_from_tag};
//!
//! let changelog = "## 1.2.3\n\nFixed bug A\n\n## 1.2.2\n\nOlder notes\n";
//! let notes = extract_from_str(changelog, version_from_tag("v1.2.3"));
//! assert_eq!(notes, "## 1.2.3\n\nFixed bug A");
//! ```
//!
//! # Modules
//!
//! - [`notes`] - Tag handling and the section scan
//! - [`stdio`] - File-or-stream endpoints (`-` selects stdin/stdout)
//! - [`error`] - Typed I/O errors

pub mod error;
pub mod notes;
pub mod stdio;

pub use error::{NotesError, Result};
pub use notes::{extract_from_str, extract_notes, is_heading, version_from_tag};
pub use stdio::Endpoint;
