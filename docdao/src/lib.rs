//! Main docdao crate providing a typed accessor layer over document stores.
//!
//! This crate is the primary entry point for users of docdao. It re-exports
//! the core accessor machinery and bundles the in-memory backend for
//! development and testing.
//!
//! # Features
//!
//! - **Typed CRUD** - Create/Read/Update/Delete one serde-defined document shape per accessor
//! - **Predicate search** - Conjunctive operator-token predicates translated to the backend's syntax
//! - **Normalized errors** - Backend status codes mapped to a small, stable taxonomy
//! - **Graceful bulk reads** - Search excludes corrupt rows instead of failing wholesale
//!
//! # Quick start
//!
//! ```ignore
//! use docdao::{prelude::*, memory::InMemoryBackend};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Player {
//!     pub name: String,
//!     pub score: i64,
//! }
//!
//! #[tokio::main]
//! async fn main() -> DaoResult<()> {
//!     let players: Dao<_, Player> = Dao::new(InMemoryBackend::new(), "players");
//!
//!     players.create("p1", &Player { name: "Alice".into(), score: 10 }).await?;
//!
//!     // Conflict on the second create with the same key.
//!     let second = players.create("p1", &Player { name: "Bob".into(), score: 3 }).await;
//!     assert!(matches!(second, Err(DaoError::Conflict(..))));
//!
//!     let high_scores = players.search(&[Predicate::gt("score", 5)]).await?;
//!     println!("{high_scores:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Bringing your own backend
//!
//! Implement [`backend::DocumentBackend`] over your store's client and hand
//! the handle to [`dao::Dao::new`]. The contract is five operations:
//! create-if-absent, partial field update, unconditional delete, point
//! read, and a conjunctive filter query. Report failures as
//! [`error::BackendError`] status codes and the accessor takes care of
//! normalization.

pub mod prelude;

pub use docdao_core::{backend, dao, document, error, query, update};

// Re-export BSON types for convenience
pub use bson;

/// In-memory backend implementation.
pub mod memory {
    pub use docdao_memory::InMemoryBackend;
}
