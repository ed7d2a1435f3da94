//! In-memory readme store.
//!
//! Contents live for the lifetime of the process. The whole map sits behind
//! one `RwLock`; writers hold it across their existence check and mutation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ReadmeStore;
use crate::{Error, Result};

/// Process-local readme store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    readmes: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of readmes created so far.
    pub async fn len(&self) -> usize {
        self.readmes.read().await.len()
    }

    /// Returns `true` if no readme has been created.
    pub async fn is_empty(&self) -> bool {
        self.readmes.read().await.is_empty()
    }
}

#[async_trait]
impl ReadmeStore for MemoryStore {
    async fn create(&self, id: &str) -> Result<()> {
        let mut readmes = self.readmes.write().await;
        if readmes.get(id).is_some_and(|f| !f.is_empty()) {
            return Err(Error::already_exists(id));
        }
        readmes.insert(id.to_string(), vec![String::new()]);
        tracing::debug!(id, "created readme");
        Ok(())
    }

    async fn exists(&self, id: &str) -> bool {
        self.readmes
            .read()
            .await
            .get(id)
            .is_some_and(|f| !f.is_empty())
    }

    async fn append(&self, id: &str, fragment: String) -> Result<()> {
        let mut readmes = self.readmes.write().await;
        match readmes.get_mut(id) {
            Some(fragments) if !fragments.is_empty() => {
                fragments.push(fragment);
                tracing::debug!(id, fragments = fragments.len(), "appended fragment");
                Ok(())
            }
            _ => Err(Error::not_found(id)),
        }
    }

    async fn get_all(&self, id: &str) -> Result<Vec<String>> {
        match self.readmes.read().await.get(id) {
            Some(fragments) if !fragments.is_empty() => Ok(fragments.clone()),
            _ => Err(Error::not_found(id)),
        }
    }

    async fn export(&self, id: &str) -> Vec<u8> {
        self.readmes
            .read()
            .await
            .get(id)
            .map(|fragments| fragments.concat().into_bytes())
            .unwrap_or_default()
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
