//! Readme storage.
//!
//! A readme is an append-only list of fragments. Creation seeds the list
//! with a single empty-string placeholder, and "exists" means "the list
//! has at least one element". Every backend must keep that placeholder:
//! [`ReadmeStore::get_all`] returns it at index 0.
//!
//! # Example
//!
//! ```
//! use readme_core::store::{MemoryStore, ReadmeStore};
//!
//! # tokio_test_block(async {
//! let store = MemoryStore::new();
//! store.create("docs").await.unwrap();
//! store.append("docs", "# Title\n".to_string()).await.unwrap();
//!
//! let fragments = store.get_all("docs").await.unwrap();
//! assert_eq!(fragments, vec!["".to_string(), "# Title\n".to_string()]);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::Result;

pub use memory::MemoryStore;

/// Generate a fresh readme identifier for unnamed creation.
pub fn new_readme_id() -> String {
    Uuid::new_v4().to_string()
}

/// Storage backend for readmes.
///
/// Implementations must make `create` and `append` atomic with respect to
/// their own existence check so concurrent callers never lose fragments.
#[async_trait]
pub trait ReadmeStore: Send + Sync {
    /// Create an empty readme under `id`.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyExists`](crate::Error::AlreadyExists) if `id` is taken.
    async fn create(&self, id: &str) -> Result<()>;

    /// Returns `true` if `id` has been created.
    async fn exists(&self, id: &str) -> bool;

    /// Append a fragment to the end of the readme.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) if `id` was never created.
    async fn append(&self, id: &str, fragment: String) -> Result<()>;

    /// Every fragment in document order, placeholder included.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) if `id` was never created.
    async fn get_all(&self, id: &str) -> Result<Vec<String>>;

    /// Concatenated fragment bytes, ready to be written out.
    ///
    /// Does not check existence: an unknown `id` exports as empty.
    async fn export(&self, id: &str) -> Vec<u8>;

    /// The assembled document as one string.
    async fn document(&self, id: &str) -> Result<String> {
        Ok(self.get_all(id).await?.concat())
    }

    /// Returns the backend name for logging.
    fn backend_name(&self) -> &str {
        "unknown"
    }
}
