//! In-memory implementation of the document backend contract.

use async_trait::async_trait;
use bson::{Bson, Document};
use mea::rwlock::RwLock;
use std::{collections::HashMap, sync::Arc};

use docdao_core::{
    backend::{DocumentBackend, Snapshot},
    error::BackendError,
    query::{Filter, UNSUPPORTED_OPERATOR},
    update::FieldUpdate,
};

use crate::evaluator::matches_filter;

type CollectionMap = HashMap<String, Bson>;
type StoreMap = HashMap<String, CollectionMap>;

/// Thread-safe in-memory document backend.
///
/// Documents are stored as BSON values keyed by collection path and
/// document key, behind an async-aware read-write lock. The struct is
/// cloneable; clones share the same underlying data, so a clone behaves
/// like a shared client handle.
///
/// Queries scan every document in a collection; there is no indexing. The
/// filter-combination and operator rejections of
/// [`query_documents`](DocumentBackend::query_documents) mirror what a
/// remote store enforces server-side.
#[derive(Default, Clone, Debug)]
pub struct InMemoryBackend {
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryBackend {
    /// Creates a new empty backend with no collections or documents.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }
}

#[async_trait]
impl DocumentBackend for InMemoryBackend {
    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        document: Bson,
    ) -> Result<(), BackendError> {
        let mut store = self.store.write().await;
        let collection_map = store
            .entry(collection.to_string())
            .or_default();

        if collection_map.contains_key(id) {
            return Err(BackendError::already_exists(format!(
                "document '{id}' already exists in '{collection}'"
            )));
        }

        collection_map.insert(id.to_string(), document);

        Ok(())
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<FieldUpdate>,
    ) -> Result<(), BackendError> {
        let mut store = self.store.write().await;

        let stored = store
            .get_mut(collection)
            .and_then(|col| col.get_mut(id))
            .ok_or_else(|| {
                BackendError::not_found(format!("no document '{id}' in '{collection}'"))
            })?;

        let target = stored.as_document_mut().ok_or_else(|| {
            BackendError::invalid_argument(format!("stored value at '{id}' is not a document"))
        })?;

        for update in updates {
            set_field(target, &update.path, update.value);
        }

        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), BackendError> {
        let mut store = self.store.write().await;

        // Deleting a vacant key is a successful no-op.
        if let Some(collection_map) = store.get_mut(collection) {
            collection_map.remove(id);
        }

        Ok(())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Snapshot, BackendError> {
        let store = self.store.read().await;

        Ok(Snapshot {
            id: id.to_string(),
            data: store
                .get(collection)
                .and_then(|col| col.get(id))
                .cloned(),
        })
    }

    async fn query_documents(
        &self,
        collection: &str,
        filters: Vec<Filter>,
    ) -> Result<Vec<Snapshot>, BackendError> {
        validate_filters(&filters)?;

        let store = self.store.read().await;
        let collection_map = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        let snapshots = collection_map
            .iter()
            .filter(|(_, doc)| {
                filters
                    .iter()
                    .all(|filter| matches_filter(doc, filter))
            })
            .map(|(id, doc)| Snapshot {
                id: id.clone(),
                data: Some(doc.clone()),
            })
            .collect();

        Ok(snapshots)
    }
}

/// Rejects filter lists a remote store would refuse to execute.
fn validate_filters(filters: &[Filter]) -> Result<(), BackendError> {
    if let Some(filter) = filters
        .iter()
        .find(|f| f.op == UNSUPPORTED_OPERATOR)
    {
        return Err(BackendError::invalid_argument(format!(
            "unsupported operator on field '{}'",
            filter.path
        )));
    }

    let has_equality = filters.iter().any(|f| f.op == "==");
    let has_range = filters
        .iter()
        .any(|f| matches!(f.op, "!=" | "<" | "<=" | ">" | ">="));

    if has_equality && has_range {
        return Err(BackendError::failed_precondition(
            "combining '==' with '!=', '<', '<=', '>', '>=' is not supported",
        ));
    }

    Ok(())
}

/// Sets a dot-addressable field, creating intermediate maps on demand. A
/// non-document value in the middle of the path is replaced by a map.
fn set_field(target: &mut Document, path: &str, value: Bson) {
    match path.split_once('.') {
        None => {
            target.insert(path, value);
        }
        Some((head, rest)) => {
            if !matches!(target.get(head), Some(Bson::Document(_))) {
                target.insert(head, Document::new());
            }

            if let Some(Bson::Document(child)) = target.get_mut(head) {
                set_field(child, rest, value);
            }
        }
    }
}
