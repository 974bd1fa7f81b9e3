//! Serialization bounds and codec helpers for stored documents.
//!
//! A document is an opaque, caller-supplied shape. The accessor never
//! interprets its fields; it only runs the shape through the codec pair
//! below. Identity lives outside the document: every operation takes a
//! caller-supplied string key.

use bson::{Bson, de::deserialize_from_bson, ser::serialize_to_bson};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::DaoResult;

/// Bounds a type must satisfy to be stored through the accessor.
///
/// Any serde-serializable, thread-safe, owned type qualifies; the blanket
/// impl below makes this automatic.
///
/// # Example
///
/// ```ignore
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct User {
///     pub name: String,
///     pub email: String,
/// }
/// // `User` is a `Document` with no further impls.
/// ```
pub trait Document: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {}

impl<T> Document for T where T: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {}

/// Extension trait providing the codec pair for documents.
///
/// Automatically implemented for every [`Document`]. The BSON pair is the
/// storage codec; the JSON pair is for interchange with surrounding
/// services.
pub trait DocumentExt: Document {
    /// Converts this document to a BSON value for storage.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::Corrupt`](crate::error::DaoError::Corrupt) if serialization fails.
    fn to_bson(&self) -> DaoResult<Bson>;

    /// Creates a document from a stored BSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::Corrupt`](crate::error::DaoError::Corrupt) if deserialization fails.
    fn from_bson(bson: Bson) -> DaoResult<Self>;

    /// Converts this document to a JSON value.
    fn to_json(&self) -> DaoResult<Value>;

    /// Creates a document from a JSON value.
    fn from_json(value: Value) -> DaoResult<Self>;
}

impl<D: Document> DocumentExt for D {
    fn to_bson(&self) -> DaoResult<Bson> {
        Ok(serialize_to_bson(self)?)
    }

    fn from_bson(bson: Bson) -> DaoResult<Self> {
        Ok(deserialize_from_bson(bson)?)
    }

    fn to_json(&self) -> DaoResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> DaoResult<Self> {
        Ok(from_value(value)?)
    }
}
