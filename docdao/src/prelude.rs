//! Convenient re-exports of commonly used types from docdao.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docdao::prelude::*;
//! ```

pub use docdao_core::{
    backend::{DocumentBackend, Snapshot},
    dao::{CREATED_FIELD, Dao, SkipReporter, TracingReporter, UPDATED_FIELD},
    document::{Document, DocumentExt},
    error::{BackendError, DaoError, DaoResult, StatusCode},
    query::{Filter, Predicate, UNSUPPORTED_OPERATOR, native_operator},
    update::{FieldUpdate, Update, to_field_updates},
};
