//! Readme Core: fragment rendering, readme storage, and export.
//!
//! This crate holds everything about building a readme that is independent
//! of the HTTP surface.
//!
//! # Modules
//!
//! - [`editor`]: The edit operations, tying a store to a renderer
//! - [`error`]: Error types and Result alias
//! - [`export`]: Writing assembled readmes to disk
//! - [`markdown`]: Fragment rendering rules
//! - [`store`]: The readme store abstraction and its in-memory backend

#![doc = include_str!("../README.md")]

pub mod editor;
pub mod error;
pub mod export;
pub mod markdown;
pub mod store;

// Re-export key types at crate root for convenience
pub use editor::ReadmeEditor;
pub use error::{Error, Result};
pub use markdown::{CodeLanguages, FragmentRenderer, HeadingKind, Table};
pub use store::{MemoryStore, ReadmeStore};
