//! Error types and result types for document accessor operations.
//!
//! Two layers live here. [`BackendError`] is what a backend client surfaces:
//! a status code plus a message, in the style of a remote SDK. [`DaoError`]
//! is the normalized taxonomy the accessor exposes to callers; backend
//! errors the normalizer does not claim pass through it unchanged.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use thiserror::Error;

/// Status code attached to a backend failure.
///
/// Backends distinguish the conditions the accessor normalizes (existing
/// key, missing key, rejected query shape) through these codes; everything
/// else lands on the broader codes and passes through untranslated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// The request was malformed, e.g. an operator the backend does not know.
    InvalidArgument,
    /// No document exists at the addressed key.
    NotFound,
    /// A document already exists at the addressed key.
    AlreadyExists,
    /// The request shape is unsupported by the backend, e.g. a rejected filter combination.
    FailedPrecondition,
    /// The backend is temporarily unreachable or overloaded.
    Unavailable,
    /// The backend failed internally.
    Internal,
    /// Anything the backend could not classify.
    Unknown,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusCode::InvalidArgument => "invalid argument",
            StatusCode::NotFound => "not found",
            StatusCode::AlreadyExists => "already exists",
            StatusCode::FailedPrecondition => "failed precondition",
            StatusCode::Unavailable => "unavailable",
            StatusCode::Internal => "internal",
            StatusCode::Unknown => "unknown",
        })
    }
}

/// A failure reported by the backend client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("backend error ({code}): {message}")]
pub struct BackendError {
    code: StatusCode,
    message: String,
}

impl BackendError {
    /// Creates a backend error with an explicit status code.
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Shorthand for an [`StatusCode::InvalidArgument`] error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(StatusCode::InvalidArgument, message)
    }

    /// Shorthand for a [`StatusCode::NotFound`] error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, message)
    }

    /// Shorthand for an [`StatusCode::AlreadyExists`] error.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(StatusCode::AlreadyExists, message)
    }

    /// Shorthand for a [`StatusCode::FailedPrecondition`] error.
    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FailedPrecondition, message)
    }

    /// Returns the status code of this error.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Returns the backend-supplied message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The normalized error taxonomy of the accessor.
///
/// Conditions detectable from backend status codes or codec failures are
/// translated into the contextualized variants below; every other backend
/// error passes through the [`DaoError::Backend`] variant unwrapped so
/// callers can still inspect backend-specific detail.
#[derive(Error, Debug)]
pub enum DaoError {
    /// A create hit an existing document.
    /// The first argument is the document key, the second is the collection path.
    #[error("document '{0}' already exists in collection '{1}'")]
    Conflict(String, String),
    /// A read addressed a key with no document.
    /// The first argument is the document key, the second is the collection path.
    #[error("document '{0}' not found in collection '{1}'")]
    NotFound(String, String),
    /// A stored snapshot could not be (de)serialized into the document shape.
    #[error("snapshot serialization failed: {0}")]
    Corrupt(String),
    /// The backend rejected the combined predicate shape of a search.
    #[error("query not supported: combining '==' with '!=', '<', '<=', '>', '>='")]
    BadRequest,
    /// A single row failed during a bulk search and was excluded from the
    /// result set. Delivered to the skip reporter, never returned from
    /// [`Dao::search`](crate::dao::Dao::search).
    #[error("document '{0}' skipped: {1}")]
    Skipped(String, String),
    /// Any backend error the normalizer does not claim.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A specialized `Result` type for accessor operations.
pub type DaoResult<T> = Result<T, DaoError>;

impl From<BsonError> for DaoError {
    fn from(err: BsonError) -> Self {
        DaoError::Corrupt(err.to_string())
    }
}

impl From<SerdeJsonError> for DaoError {
    fn from(err: SerdeJsonError) -> Self {
        DaoError::Corrupt(err.to_string())
    }
}
