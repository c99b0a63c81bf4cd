// Read side only: the accessor never mutates a store.
// Ownership, lifecycle and synchronization belong to the application.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::{Map, Value};

use crate::metadata::record::DocumentMetadata;

/// Anything that can look up a metadata record by document key.
pub trait MetadataStore {
    fn get(&self, key: &str) -> Option<DocumentMetadata>;
}

impl<S: BuildHasher> MetadataStore for HashMap<String, DocumentMetadata, S> {
    fn get(&self, key: &str) -> Option<DocumentMetadata> {
        HashMap::get(self, key).cloned()
    }
}

impl MetadataStore for BTreeMap<String, DocumentMetadata> {
    fn get(&self, key: &str) -> Option<DocumentMetadata> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<M: MetadataStore> MetadataStore for RwLock<M> {
    fn get(&self, key: &str) -> Option<DocumentMetadata> {
        // Read-only; a poisoned map is still whole.
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(key)
    }
}

impl<M: MetadataStore + ?Sized> MetadataStore for Arc<M> {
    fn get(&self, key: &str) -> Option<DocumentMetadata> {
        (**self).get(key)
    }
}

impl<M: MetadataStore + ?Sized> MetadataStore for &M {
    fn get(&self, key: &str) -> Option<DocumentMetadata> {
        (**self).get(key)
    }
}

/// In-process store for applications that do not bring their own.
///
/// One record per key; a second insert under the same key replaces the first.
#[derive(Debug, Clone, Default)]
pub struct LocalMetadataStore {
    inner: BTreeMap<String, DocumentMetadata>,
}

impl LocalMetadataStore {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Returns the record previously stored under `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, metadata: DocumentMetadata) -> Option<DocumentMetadata> {
        self.inner.insert(key.into(), metadata)
    }

    pub fn remove(&mut self, key: &str) -> Option<DocumentMetadata> {
        self.inner.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }
}

impl MetadataStore for LocalMetadataStore {
    fn get(&self, key: &str) -> Option<DocumentMetadata> {
        self.inner.get(key).cloned()
    }
}

impl FromIterator<(String, DocumentMetadata)> for LocalMetadataStore {
    fn from_iter<I: IntoIterator<Item = (String, DocumentMetadata)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// Serialized metadata for `document_key`, or an empty map when the store
/// has no record for it. A miss is a normal outcome, not an error.
pub fn get_metadata<M: MetadataStore + ?Sized>(store: &M, document_key: &str) -> Map<String, Value> {
    match store.get(document_key) {
        Some(metadata) => metadata.to_map(),
        None => {
            tracing::debug!(document_key, "no metadata stored for document");
            Map::new()
        }
    }
}
