//! The path-scoped document accessor.
//!
//! [`Dao`] is a stateless translator between a typed document shape and one
//! collection of a document store. It owns a backend handle and a collection
//! path, exposes Create/Read/Update/Delete/Search, and normalizes backend
//! failures into the taxonomy in [`error`](crate::error).
//!
//! Concurrent calls against the same accessor are independent: there is no
//! internal locking or per-call state, and ordering between simultaneous
//! calls is whatever the backend's own per-document serialization provides.
//!
//! # Example
//!
//! ```ignore
//! use docdao_core::{dao::Dao, query::Predicate, update::Update};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Player {
//!     pub name: String,
//!     pub score: i64,
//! }
//!
//! # async fn example(backend: impl docdao_core::backend::DocumentBackend) -> docdao_core::error::DaoResult<()> {
//! let players: Dao<_, Player> = Dao::new(backend, "players");
//!
//! players.create("p1", &Player { name: "Alice".into(), score: 10 }).await?;
//!
//! let mut update = Update::new();
//! update.insert("score".into(), 25.into());
//! players.update("p1", update).await?;
//!
//! let winners = players.search(&[Predicate::gt("score", 20)]).await?;
//! # Ok(()) }
//! ```

use bson::{Bson, DateTime};
use chrono::Utc;
use std::{marker::PhantomData, sync::Arc};

use crate::{
    backend::DocumentBackend,
    document::{Document, DocumentExt},
    error::{DaoError, DaoResult, StatusCode},
    query::Predicate,
    update::{FieldUpdate, Update, to_field_updates},
};

/// Field attached on create with the creation time.
pub const CREATED_FIELD: &str = "created";

/// Field attached on create and advanced on every update.
pub const UPDATED_FIELD: &str = "updated";

/// Receives per-row failures a search excluded from its result set.
///
/// Search never fails wholesale because one stored row no longer matches
/// the document shape; the failing row is handed to this reporter instead.
/// The default is [`TracingReporter`]; tests and callers with their own
/// telemetry supply an implementation via [`Dao::with_reporter`].
pub trait SkipReporter: Send + Sync {
    /// Called once per excluded row with the row's key and the
    /// [`DaoError::Skipped`] describing why it was dropped.
    fn document_skipped(&self, id: &str, error: &DaoError);
}

/// Default skip reporter: logs each excluded row through `tracing`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl SkipReporter for TracingReporter {
    fn document_skipped(&self, id: &str, error: &DaoError) {
        tracing::error!(id, %error, "skipping document during search");
    }
}

/// A generic, path-scoped accessor over one collection of documents.
///
/// Parameterized by the backend handle type `B` and the document shape `D`.
/// The collection path is fixed at construction. The backend handle is an
/// injected dependency; pass an `Arc<B>` (or `&B`) to share one client
/// across accessors.
pub struct Dao<B: DocumentBackend, D: Document> {
    backend: B,
    path: String,
    reporter: Arc<dyn SkipReporter>,
    _marker: PhantomData<D>,
}

impl<B: DocumentBackend, D: Document> Dao<B, D> {
    /// Creates an accessor for the collection at `path`, reporting skipped
    /// rows through [`TracingReporter`].
    pub fn new(backend: B, path: impl Into<String>) -> Self {
        Self::with_reporter(backend, path, Arc::new(TracingReporter))
    }

    /// Creates an accessor with a caller-supplied skip reporter.
    pub fn with_reporter(
        backend: B,
        path: impl Into<String>,
        reporter: Arc<dyn SkipReporter>,
    ) -> Self {
        Self {
            backend,
            path: path.into(),
            reporter,
            _marker: PhantomData,
        }
    }

    /// Returns the collection path this accessor is scoped to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Inserts `document` at `path/id` iff no document exists there, then
    /// attaches [`CREATED_FIELD`] and [`UPDATED_FIELD`] set to the current
    /// time.
    ///
    /// The timestamps ride a second backend call after the create; a crash
    /// or failure between the two leaves the document stored without them.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::Conflict`] when a document already exists at the
    /// key; any other backend error passes through unnormalized.
    pub async fn create(&self, id: &str, document: &D) -> DaoResult<()> {
        let data = document.to_bson()?;

        match self.backend.create_document(&self.path, id, data).await {
            Ok(()) => {}
            Err(err) if err.code() == StatusCode::AlreadyExists => {
                return Err(DaoError::Conflict(id.to_string(), self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        }

        let now = timestamp();
        let stamps = vec![
            FieldUpdate::new(CREATED_FIELD, now.clone()),
            FieldUpdate::new(UPDATED_FIELD, now),
        ];

        self.backend
            .update_document(&self.path, id, stamps)
            .await?;

        Ok(())
    }

    /// Fetches the document at `path/id` and deserializes it.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::NotFound`] for a vacant key and
    /// [`DaoError::Corrupt`] when the stored snapshot does not deserialize
    /// into `D`; any other backend error passes through unnormalized.
    pub async fn read(&self, id: &str) -> DaoResult<D> {
        let snapshot = self.backend.get_document(&self.path, id).await?;

        let Some(data) = snapshot.data else {
            return Err(DaoError::NotFound(id.to_string(), self.path.clone()));
        };

        D::from_bson(data)
    }

    /// Applies `update` to the document at `path/id` as a single backend
    /// call, with one extra instruction advancing [`UPDATED_FIELD`] to the
    /// current time. An empty mapping is a legal no-op that still advances
    /// the timestamp.
    ///
    /// # Errors
    ///
    /// Every backend error passes through unnormalized. In particular a
    /// missing document surfaces as the backend's own not-found error, not
    /// as [`DaoError::NotFound`] — unlike [`Dao::read`].
    pub async fn update(&self, id: &str, update: Update) -> DaoResult<()> {
        let mut updates = to_field_updates(update);
        updates.push(FieldUpdate::new(UPDATED_FIELD, timestamp()));

        self.backend
            .update_document(&self.path, id, updates)
            .await?;

        Ok(())
    }

    /// Unconditionally deletes the document at `path/id`.
    ///
    /// Deleting a vacant key follows the backend's no-op-delete semantics
    /// and succeeds; this accessor does not special-case it.
    ///
    /// # Errors
    ///
    /// Every backend error passes through unnormalized.
    pub async fn delete(&self, id: &str) -> DaoResult<()> {
        self.backend
            .delete_document(&self.path, id)
            .await?;

        Ok(())
    }

    /// Executes a conjunctive search over the collection and returns every
    /// matching document. An empty predicate slice fetches the whole
    /// collection. Result order is backend-defined.
    ///
    /// Each snapshot deserializes independently: a row that no longer
    /// matches `D` is handed to the skip reporter and excluded, while all
    /// other rows are still returned.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::BadRequest`] when the backend rejects the
    /// combined predicate shape (the backend does not support an equality
    /// filter mixed with an inequality/ordering filter); any other backend
    /// error passes through unnormalized.
    pub async fn search(&self, predicates: &[Predicate]) -> DaoResult<Vec<D>> {
        let filters = predicates
            .iter()
            .map(Predicate::to_filter)
            .collect();

        let snapshots = match self.backend.query_documents(&self.path, filters).await {
            Ok(snapshots) => snapshots,
            Err(err) if err.code() == StatusCode::FailedPrecondition => {
                return Err(DaoError::BadRequest);
            }
            Err(err) => return Err(err.into()),
        };

        let mut documents = Vec::with_capacity(snapshots.len());

        for snapshot in snapshots {
            let Some(data) = snapshot.data else {
                continue;
            };

            match D::from_bson(data) {
                Ok(document) => documents.push(document),
                Err(err) => {
                    let skipped = DaoError::Skipped(snapshot.id.clone(), err.to_string());
                    self.reporter
                        .document_skipped(&snapshot.id, &skipped);
                }
            }
        }

        Ok(documents)
    }
}

fn timestamp() -> Bson {
    Bson::DateTime(DateTime::from_chrono(Utc::now()))
}
