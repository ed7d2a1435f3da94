//! Shared handler state.
//!
//! [`AppState`] is built once at startup and cloned into every request.
//! Cloning is cheap: the store sits behind an `Arc` and the export path is
//! shared.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use readme_core::{CodeLanguages, FragmentRenderer, MemoryStore, ReadmeEditor};

/// State available to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    editor: ReadmeEditor,
    export_path: Arc<Path>,
}

impl AppState {
    /// Create state from an editor and the export target.
    pub fn new(editor: ReadmeEditor, export_path: impl Into<PathBuf>) -> Self {
        Self {
            editor,
            export_path: Arc::from(export_path.into()),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(languages: CodeLanguages, export_path: impl Into<PathBuf>) -> Self {
        let editor = ReadmeEditor::new(
            Arc::new(MemoryStore::new()),
            FragmentRenderer::new(languages),
        );
        Self::new(editor, export_path)
    }

    /// The edit service.
    pub fn editor(&self) -> &ReadmeEditor {
        &self.editor
    }

    /// Where `POST /readme/{id}/file` writes.
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_core::ReadmeStore;

    #[test]
    fn test_app_state_in_memory() {
        let state = AppState::in_memory(CodeLanguages::default(), "/tmp/readme.md");
        assert_eq!(state.export_path(), Path::new("/tmp/readme.md"));
        assert!(state.editor().renderer().languages().contains("go"));
    }

    #[tokio::test]
    async fn test_app_state_clone_shares_store() {
        let state1 = AppState::in_memory(CodeLanguages::default(), "/tmp/readme.md");
        let state2 = state1.clone();

        state1.editor().create(Some("shared")).await.unwrap();
        assert!(state2.editor().store().exists("shared").await);
    }

    #[test]
    fn test_app_state_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
