//! The contract a document-store client must fulfil.
//!
//! The accessor owns no persistent state; everything lives behind the
//! [`DocumentBackend`] trait. A backend is typically a thin adapter over a
//! remote store's SDK, but anything that can honor the semantics below
//! works — see the in-memory implementation in the `docdao-memory` crate.
//!
//! # Required semantics
//!
//! - [`create_document`](DocumentBackend::create_document) is a true
//!   create-if-absent: the existence check and the write are one atomic
//!   backend operation, and an existing key fails with
//!   [`StatusCode::AlreadyExists`](crate::error::StatusCode::AlreadyExists).
//! - [`update_document`](DocumentBackend::update_document) patches
//!   individual fields (dot paths address nested fields) and fails with
//!   [`StatusCode::NotFound`](crate::error::StatusCode::NotFound) for a
//!   missing document.
//! - [`delete_document`](DocumentBackend::delete_document) succeeds when the
//!   key does not exist.
//! - [`query_documents`](DocumentBackend::query_documents) combines filters
//!   conjunctively and materializes every match; an unsupported filter
//!   combination fails with
//!   [`StatusCode::FailedPrecondition`](crate::error::StatusCode::FailedPrecondition),
//!   a malformed operator with
//!   [`StatusCode::InvalidArgument`](crate::error::StatusCode::InvalidArgument).
//!
//! # Thread safety
//!
//! Implementations must be `Send + Sync` and support concurrent calls; the
//! accessor issues them without coordination. Cancellation propagates by
//! dropping the returned future.

use async_trait::async_trait;
use bson::Bson;
use std::{fmt::Debug, sync::Arc};

use crate::{error::BackendError, query::Filter, update::FieldUpdate};

/// A point-in-time read of a document's stored payload plus existence.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The document's key within its collection.
    pub id: String,
    /// The stored payload, or `None` when no document exists at the key.
    pub data: Option<Bson>,
}

impl Snapshot {
    /// Returns whether a document existed at the key when the read happened.
    pub fn exists(&self) -> bool {
        self.data.is_some()
    }
}

/// Abstract interface for document-store clients.
///
/// All methods report failure as a [`BackendError`] carrying a status code;
/// the accessor normalizes the codes it understands and forwards the rest.
#[async_trait]
pub trait DocumentBackend: Send + Sync + Debug {
    /// Inserts a new document at `collection/id` iff the key is vacant.
    ///
    /// # Errors
    ///
    /// Fails with [`StatusCode::AlreadyExists`](crate::error::StatusCode::AlreadyExists)
    /// when a document is already stored at the key.
    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        document: Bson,
    ) -> Result<(), BackendError>;

    /// Applies a list of per-field update instructions to the document at
    /// `collection/id`, leaving unmentioned fields untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`StatusCode::NotFound`](crate::error::StatusCode::NotFound)
    /// when no document is stored at the key.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<FieldUpdate>,
    ) -> Result<(), BackendError>;

    /// Removes the document at `collection/id`. Removing a vacant key is a
    /// successful no-op.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), BackendError>;

    /// Reads the document at `collection/id`, returning a [`Snapshot`] whose
    /// `data` is `None` for a vacant key.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Snapshot, BackendError>;

    /// Executes a conjunctive filter query and materializes every matching
    /// snapshot. An empty filter list matches every document in the
    /// collection. Result order is backend-defined.
    ///
    /// # Errors
    ///
    /// Fails with [`StatusCode::FailedPrecondition`](crate::error::StatusCode::FailedPrecondition)
    /// for an unsupported filter combination and
    /// [`StatusCode::InvalidArgument`](crate::error::StatusCode::InvalidArgument)
    /// for an operator the backend does not know.
    async fn query_documents(
        &self,
        collection: &str,
        filters: Vec<Filter>,
    ) -> Result<Vec<Snapshot>, BackendError>;
}

#[async_trait]
impl<B> DocumentBackend for &B
where
    B: DocumentBackend,
{
    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        document: Bson,
    ) -> Result<(), BackendError> {
        (*self)
            .create_document(collection, id, document)
            .await
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<FieldUpdate>,
    ) -> Result<(), BackendError> {
        (*self)
            .update_document(collection, id, updates)
            .await
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), BackendError> {
        (*self)
            .delete_document(collection, id)
            .await
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Snapshot, BackendError> {
        (*self).get_document(collection, id).await
    }

    async fn query_documents(
        &self,
        collection: &str,
        filters: Vec<Filter>,
    ) -> Result<Vec<Snapshot>, BackendError> {
        (*self)
            .query_documents(collection, filters)
            .await
    }
}

#[async_trait]
impl<B> DocumentBackend for Arc<B>
where
    B: DocumentBackend,
{
    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        document: Bson,
    ) -> Result<(), BackendError> {
        (**self)
            .create_document(collection, id, document)
            .await
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<FieldUpdate>,
    ) -> Result<(), BackendError> {
        (**self)
            .update_document(collection, id, updates)
            .await
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), BackendError> {
        (**self)
            .delete_document(collection, id)
            .await
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Snapshot, BackendError> {
        (**self).get_document(collection, id).await
    }

    async fn query_documents(
        &self,
        collection: &str,
        filters: Vec<Filter>,
    ) -> Result<Vec<Snapshot>, BackendError> {
        (**self)
            .query_documents(collection, filters)
            .await
    }
}
