//! In-memory document backend for docdao.
//!
//! This crate provides a thread-safe, in-memory implementation of the
//! `DocumentBackend` contract. It is intended for development and testing:
//! it honors the full contract, including the semantics a remote store
//! enforces on its side — create-if-absent, no-op deletes of vacant keys,
//! and rejection of unsupported filter combinations.
//!
//! # Quick start
//!
//! ```ignore
//! use docdao_core::dao::Dao;
//! use docdao_memory::InMemoryBackend;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     pub name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let users: Dao<_, User> = Dao::new(InMemoryBackend::new(), "users");
//!
//!     users.create("u1", &User { name: "Alice".into() }).await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docdao_memory;

pub mod evaluator;
pub mod store;

pub use store::InMemoryBackend;
