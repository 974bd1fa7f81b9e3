//! Filter evaluation over stored BSON documents.

use bson::{Bson, Document, datetime::DateTime};
use std::cmp::Ordering;

use docdao_core::query::Filter;

/// Type-erased, comparable view of a BSON value.
///
/// Normalizes every numeric type to f64 so filters compare across integer
/// widths. Values of mismatched types are never equal and never ordered.
#[derive(Debug)]
enum Comparable<'a> {
    Null,
    Bool(bool),
    Number(f64),
    DateTime(DateTime),
    String(&'a str),
    Array(Vec<Comparable<'a>>),
}

impl<'a> From<&'a Bson> for Comparable<'a> {
    fn from(bson: &'a Bson) -> Self {
        match bson {
            Bson::Boolean(value) => Comparable::Bool(*value),
            Bson::Int32(value) => Comparable::Number(*value as f64),
            Bson::Int64(value) => Comparable::Number(*value as f64),
            Bson::Double(value) => Comparable::Number(*value),
            Bson::DateTime(value) => Comparable::DateTime(*value),
            Bson::String(value) => Comparable::String(value),
            Bson::Array(arr) => Comparable::Array(
                arr.iter()
                    .map(Comparable::from)
                    .collect::<Vec<_>>(),
            ),
            _ => Comparable::Null,
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::Bool(a), Comparable::Bool(b)) => a == b,
            (Comparable::Number(a), Comparable::Number(b)) => a == b,
            (Comparable::DateTime(a), Comparable::DateTime(b)) => a == b,
            (Comparable::String(a), Comparable::String(b)) => a == b,
            (Comparable::Array(a), Comparable::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> PartialOrd for Comparable<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Bool(a), Comparable::Bool(b)) => a.partial_cmp(b),
            (Comparable::Number(a), Comparable::Number(b)) => a.partial_cmp(b),
            (Comparable::DateTime(a), Comparable::DateTime(b)) => a.partial_cmp(b),
            (Comparable::String(a), Comparable::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Resolves a dot-addressable field path inside a document.
fn lookup_field<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    match path.split_once('.') {
        None => document.get(path),
        Some((head, rest)) => match document.get(head) {
            Some(Bson::Document(child)) => lookup_field(child, rest),
            _ => None,
        },
    }
}

/// Evaluates one native filter against a stored value.
///
/// A missing field never matches, and neither does an ordering comparison
/// between incomparable types.
pub(crate) fn matches_filter(stored: &Bson, filter: &Filter) -> bool {
    let Some(document) = stored.as_document() else {
        return false;
    };

    let Some(field_value) = lookup_field(document, &filter.path) else {
        return false;
    };

    let left = Comparable::from(field_value);
    let right = Comparable::from(&filter.value);

    match filter.op {
        "==" => left == right,
        "!=" => left != right,
        "<" | "<=" | ">" | ">=" => match left.partial_cmp(&right) {
            Some(ordering) => match filter.op {
                "<" => ordering == Ordering::Less,
                "<=" => ordering == Ordering::Less || ordering == Ordering::Equal,
                ">" => ordering == Ordering::Greater,
                ">=" => ordering == Ordering::Greater || ordering == Ordering::Equal,
                _ => unreachable!(),
            },
            None => false,
        },
        _ => false,
    }
}
