//! A generic CRUD and predicate-search accessor layer for document stores.
//!
//! This crate is the core of the docdao project and provides:
//!
//! - **Document traits** ([`document`]) - Serialization bounds and codec helpers for stored documents
//! - **Backend contract** ([`backend`]) - The trait a document-store client must fulfil
//! - **Predicate translation** ([`query`]) - Operator-token predicates and their native filter form
//! - **Update translation** ([`update`]) - Field-path update mappings and their native instruction form
//! - **The accessor** ([`dao`]) - Path-scoped Create/Read/Update/Delete/Search over a backend
//! - **Error handling** ([`error`]) - Backend status codes and the normalized error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use docdao_core::{dao::Dao, query::Predicate};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     pub name: String,
//!     pub age: i64,
//! }
//!
//! # async fn example(backend: impl docdao_core::backend::DocumentBackend) -> docdao_core::error::DaoResult<()> {
//! let users: Dao<_, User> = Dao::new(backend, "users");
//!
//! users.create("u1", &User { name: "Alice".into(), age: 30 }).await?;
//! let adults = users.search(&[Predicate::ge("age", 18)]).await?;
//! # Ok(()) }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docdao_core;

pub mod backend;
pub mod dao;
pub mod document;
pub mod error;
pub mod query;
pub mod update;
