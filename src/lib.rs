//! tocprune: keep a book's table of contents in step with deleted files.
//!
//! A [`Summary`] is pruned against a deleted file or directory path with
//! [`prune::delete_by_path`]. Articles pointing at the deleted path disappear, unless they
//! still have children pointing elsewhere, in which case they stay as unlinked headings.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod location;
pub mod pipeline;
pub mod prune;
pub mod summary;

pub use error::{Error, Result};
pub use summary::{Article, Part, Summary};
