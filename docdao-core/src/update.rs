//! Update mappings and their native instruction form.
//!
//! A partial update is a mapping from dot-addressable field path to new
//! value. Each entry targets a disjoint field path, so application order is
//! irrelevant; translation is 1:1 into the backend's per-field instruction
//! list. Field-path syntax is not validated here — the backend validates.

use bson::Bson;
use std::collections::HashMap;

/// A partial-update mapping: dot-addressable field path → new value.
///
/// An empty mapping is a legal no-op update.
pub type Update = HashMap<String, Bson>;

/// One native per-field update instruction.
#[derive(Debug, Clone)]
pub struct FieldUpdate {
    /// Dot-addressable path of the field to set.
    pub path: String,
    /// The new value.
    pub value: Bson,
}

impl FieldUpdate {
    /// Creates a single field update instruction.
    pub fn new(path: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Translates an update mapping into the backend's instruction list.
pub fn to_field_updates(update: Update) -> Vec<FieldUpdate> {
    update
        .into_iter()
        .map(|(path, value)| FieldUpdate { path, value })
        .collect()
}
