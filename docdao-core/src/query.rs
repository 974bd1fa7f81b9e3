//! Predicate construction and operator translation for searches.
//!
//! A search is an ordered list of [`Predicate`] triples combined with
//! implicit AND. Each predicate carries an operator *token* (`EQ`, `NE`,
//! `LT`, `GT`, `LE`, `GE`, any letter case); translation turns the token
//! into the backend's literal operator syntax and produces the [`Filter`]
//! form backends consume.
//!
//! Unrecognized tokens translate to the [`UNSUPPORTED_OPERATOR`] sentinel
//! and travel to the backend verbatim, so that query validation stays in
//! one place: the backend rejects the filter at execution time instead of
//! this layer rejecting the token at translation time.
//!
//! # Example
//!
//! ```ignore
//! use docdao_core::query::Predicate;
//!
//! let predicates = [
//!     Predicate::gt("score", 10),
//!     Predicate::lt("score", 100),
//! ];
//! ```

use bson::Bson;

/// Native operator emitted for a token the translator does not recognize.
///
/// Passed through to the backend verbatim; the backend rejects it.
pub const UNSUPPORTED_OPERATOR: &str = "UNKNOWN";

/// Translates an operator token into the backend's literal operator syntax.
///
/// Tokens are matched case-insensitively. Anything outside the six known
/// tokens yields [`UNSUPPORTED_OPERATOR`], never a local error.
pub fn native_operator(token: &str) -> &'static str {
    match token.to_ascii_uppercase().as_str() {
        "EQ" => "==",
        "NE" => "!=",
        "LT" => "<",
        "GT" => ">",
        "LE" => "<=",
        "GE" => ">=",
        _ => UNSUPPORTED_OPERATOR,
    }
}

/// One (field path, operator token, value) filter term of a search.
#[derive(Debug, Clone)]
pub struct Predicate {
    /// Dot-addressable field path the predicate applies to.
    pub path: String,
    /// Operator token, translated by [`native_operator`].
    pub operator: String,
    /// Value the field is compared against.
    pub value: Bson,
}

impl Predicate {
    /// Creates a predicate with an explicit operator token.
    pub fn new(path: impl Into<String>, operator: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self {
            path: path.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Equality predicate (`EQ` token).
    pub fn eq(path: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(path, "EQ", value)
    }

    /// Inequality predicate (`NE` token).
    pub fn ne(path: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(path, "NE", value)
    }

    /// Less-than predicate (`LT` token).
    pub fn lt(path: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(path, "LT", value)
    }

    /// Greater-than predicate (`GT` token).
    pub fn gt(path: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(path, "GT", value)
    }

    /// Less-than-or-equal predicate (`LE` token).
    pub fn le(path: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(path, "LE", value)
    }

    /// Greater-than-or-equal predicate (`GE` token).
    pub fn ge(path: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(path, "GE", value)
    }

    /// Translates this predicate into the filter form backends consume.
    pub fn to_filter(&self) -> Filter {
        Filter {
            path: self.path.clone(),
            op: native_operator(&self.operator),
            value: self.value.clone(),
        }
    }
}

/// A translated filter term in the backend's native syntax.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Dot-addressable field path the filter applies to.
    pub path: String,
    /// Native operator: `==`, `!=`, `<`, `>`, `<=`, `>=`, or the
    /// [`UNSUPPORTED_OPERATOR`] sentinel.
    pub op: &'static str,
    /// Value the field is compared against.
    pub value: Bson,
}
