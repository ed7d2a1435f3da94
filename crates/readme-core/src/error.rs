//! Error types for Readme Builder operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! the Readme Builder crates. Uses `thiserror` for derive macros.
//!
//! The `Display` output of each variant is the message surfaced to HTTP
//! clients, so the wording is part of the external interface.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or exporting a readme.
#[derive(Error, Debug)]
pub enum Error {
    /// A readme with the requested identifier was already created.
    #[error("Readme with that id already exists")]
    AlreadyExists(String),

    /// The operation targets an identifier that was never created.
    #[error("could not find readme")]
    NotFound(String),

    /// A paragraph or blockquote was blank after trimming whitespace.
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    /// The code fence language is not on the allow-list.
    #[error("Code language not supported")]
    UnsupportedLanguage(String),

    /// A request body failed required-field decoding.
    ///
    /// Carries the name of the expected body type.
    #[error("incorrect request body, should be {0} body")]
    MalformedRequest(&'static str),

    /// Writing an exported readme to disk failed.
    #[error("failed to write readme to {}: {source}", path.display())]
    Write {
        /// Target path of the export.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error for the given readme id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an already-exists error for the given readme id.
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists(id.into())
    }

    /// Wrap an I/O error raised while writing `path`.
    pub fn write(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the error was caused by the caller's input rather
    /// than by the service itself.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Write { .. } | Self::Io(_) | Self::Config(_))
    }
}

/// Result type alias using the Readme Builder error type.
pub type Result<T> = std::result::Result<T, Error>;
