//! Markdown fragment rendering.
//!
//! # Modules
//!
//! - [`render`]: [`FragmentRenderer`], one method per fragment kind
//! - [`syntax`]: Heading markers and the code language allow-list
//! - [`table`]: Pipe tables built from ragged columns

pub mod render;
pub mod syntax;
pub mod table;

pub use render::FragmentRenderer;
pub use syntax::{CodeLanguages, DEFAULT_CODE_LANGUAGES, HeadingKind};
pub use table::Table;
