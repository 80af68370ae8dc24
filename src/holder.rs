//! Transient content holders the exporter reads documents from.

use crate::error::ExportError;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use zoo_idf::Document;

/// Registry of documents mounted for export, keyed by content identifier.
///
/// Each identifier is owned by at most one [`MountedContent`] guard at a time.
#[derive(Debug, Default)]
pub struct ContentHolders {
    documents: RwLock<HashMap<String, Arc<Document>>>,
}

impl ContentHolders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `document` under `id` until the returned guard is dropped.
    pub fn mount(
        &self,
        id: impl Into<String>,
        document: Document,
    ) -> Result<MountedContent<'_>, ExportError> {
        let id = id.into();
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        if documents.contains_key(&id) {
            return Err(ExportError::HolderInUse(id));
        }
        documents.insert(id.clone(), Arc::new(document));
        log::debug!("Mounted content holder '{}'", id);
        Ok(MountedContent { holders: self, id })
    }

    pub fn get(&self, id: &str) -> Option<Arc<Document>> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.documents.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn unmount(&self, id: &str) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        log::debug!("Unmounted content holder '{}'", id);
    }
}

/// Scope guard for a mounted document; unmounts it on drop.
#[must_use = "the content is unmounted as soon as the guard is dropped"]
#[derive(Debug)]
pub struct MountedContent<'a> {
    holders: &'a ContentHolders,
    id: String,
}

impl MountedContent<'_> {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for MountedContent<'_> {
    fn drop(&mut self) {
        self.holders.unmount(&self.id);
    }
}
