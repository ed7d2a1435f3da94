//! Edit operations on stored readmes.
//!
//! [`ReadmeEditor`] ties a [`ReadmeStore`] to a [`FragmentRenderer`]. Every
//! `add_*` operation checks that the readme exists, renders the fragment,
//! appends it, and hands the fragment back to the caller. A rejected
//! fragment is never appended.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use readme_core::{FragmentRenderer, MemoryStore, ReadmeEditor};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let editor = ReadmeEditor::new(Arc::new(MemoryStore::new()), FragmentRenderer::default());
//! let id = editor.create(Some("guide")).await.unwrap();
//! editor.add_heading(&id, "LARGE_HEADING", "Guide").await.unwrap();
//! editor.add_paragraph(&id, "Hello.").await.unwrap();
//!
//! assert_eq!(editor.document(&id).await.unwrap(), "# Guide\nHello.\n");
//! # });
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::export::write_markdown;
use crate::markdown::{FragmentRenderer, HeadingKind, Table};
use crate::store::{ReadmeStore, new_readme_id};
use crate::{Error, Result};

/// Service layer for building readmes.
#[derive(Clone)]
pub struct ReadmeEditor {
    store: Arc<dyn ReadmeStore>,
    renderer: FragmentRenderer,
}

impl std::fmt::Debug for ReadmeEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadmeEditor")
            .field("store", &self.store.backend_name())
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl ReadmeEditor {
    /// Create an editor over the given store.
    pub fn new(store: Arc<dyn ReadmeStore>, renderer: FragmentRenderer) -> Self {
        Self { store, renderer }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn ReadmeStore> {
        &self.store
    }

    /// The renderer in use.
    pub fn renderer(&self) -> &FragmentRenderer {
        &self.renderer
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Create a readme and return its id.
    ///
    /// A missing or empty `name` gets a random UUID.
    pub async fn create(&self, name: Option<&str>) -> Result<String> {
        let id = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => new_readme_id(),
        };
        match self.store.create(&id).await {
            Ok(()) => {}
            Err(err @ Error::AlreadyExists(_)) => {
                tracing::warn!(id = %id, "readme already exists");
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "failed to create readme");
                return Err(err);
            }
        }
        tracing::info!(id = %id, "created readme");
        Ok(id)
    }

    /// All fragments of a readme, placeholder included.
    pub async fn fragments(&self, id: &str) -> Result<Vec<String>> {
        self.store.get_all(id).await
    }

    /// The readme assembled into one Markdown string.
    pub async fn document(&self, id: &str) -> Result<String> {
        self.store.document(id).await
    }

    /// Write the readme to `path` and return the number of bytes written.
    ///
    /// Unknown ids are not rejected; they produce an empty file.
    pub async fn export(&self, id: &str, path: &Path) -> Result<usize> {
        if !self.store.exists(id).await {
            tracing::warn!(id, "exporting unknown readme as empty document");
        }
        let contents = self.store.export(id).await;
        let written = write_markdown(path, &contents).await?;
        tracing::info!(id, path = %path.display(), bytes = written, "exported readme");
        Ok(written)
    }

    // ------------------------------------------------------------------------
    // Fragments
    // ------------------------------------------------------------------------

    /// Append a heading. Unknown `kind` names render without a marker.
    pub async fn add_heading(&self, id: &str, kind: &str, text: &str) -> Result<String> {
        self.ensure_exists(id).await?;
        let fragment = self.renderer.heading(HeadingKind::from_name(kind), text);
        self.append(id, fragment).await
    }

    /// Append a paragraph.
    pub async fn add_paragraph(&self, id: &str, text: &str) -> Result<String> {
        self.ensure_exists(id).await?;
        let fragment = self.renderer.paragraph(text)?;
        self.append(id, fragment).await
    }

    /// Append a fenced code block.
    pub async fn add_code(&self, id: &str, language: &str, body: &str) -> Result<String> {
        self.ensure_exists(id).await?;
        let fragment = self.renderer.code(language, body).inspect_err(|_| {
            tracing::info!(id, language, "rejected unsupported code language");
        })?;
        self.append(id, fragment).await
    }

    /// Append a blockquote.
    pub async fn add_blockquote(&self, id: &str, text: &str) -> Result<String> {
        self.ensure_exists(id).await?;
        let fragment = self.renderer.blockquote(text)?;
        self.append(id, fragment).await
    }

    /// Append a link.
    pub async fn add_link(&self, id: &str, description: &str, url: &str) -> Result<String> {
        self.ensure_exists(id).await?;
        let fragment = self.renderer.link(description, url);
        self.append(id, fragment).await
    }

    /// Append an image.
    pub async fn add_image(&self, id: &str, description: &str, url: &str) -> Result<String> {
        self.ensure_exists(id).await?;
        let fragment = self.renderer.image(description, url);
        self.append(id, fragment).await
    }

    /// Append a table.
    pub async fn add_table(&self, id: &str, table: &Table) -> Result<String> {
        self.ensure_exists(id).await?;
        let fragment = self.renderer.table(table);
        self.append(id, fragment).await
    }

    async fn ensure_exists(&self, id: &str) -> Result<()> {
        if self.store.exists(id).await {
            Ok(())
        } else {
            Err(Error::not_found(id))
        }
    }

    async fn append(&self, id: &str, fragment: String) -> Result<String> {
        self.store.append(id, fragment.clone()).await?;
        Ok(fragment)
    }
}
