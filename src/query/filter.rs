//! Filter descriptor and predicate evaluation
//!
//! A filter is a free-text search term plus a set of exact-match field
//! constraints. Every console list (hotels, kiosks, invoices, audit entries,
//! team members) feeds the same descriptor shape into the pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{FieldValue, Record};

/// The sentinel the consoles send for a dropdown left on "All".
const MATCH_ALL: &str = "all";

/// Free-text search plus exact-match field constraints.
///
/// Clause semantics:
/// - A missing/empty search term is vacuously true. Otherwise the search
///   clause holds iff at least one searchable field exists on the record,
///   is a string, and contains the term case-insensitively.
/// - An exact clause whose expected value is `Null`, the empty string, or
///   `"all"` is vacuously true. Otherwise it requires strict equality on
///   the raw field value.
/// - The overall predicate is the AND of the search clause and all exact
///   clauses. Missing fields are non-matching, never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterDescriptor {
    /// Case-insensitive substring search term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Exact-match constraints, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub exact: IndexMap<String, FieldValue>,
}

impl FilterDescriptor {
    /// A filter that matches everything
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the free-text search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Add an exact-match constraint
    pub fn exact(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.exact.insert(field.into(), value.into());
        self
    }

    /// Whether this filter constrains anything at all
    pub fn is_vacuous(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.exact.values().all(exact_clause_is_vacuous)
    }

    /// Evaluate the predicate against one record.
    ///
    /// `searchable_fields` names the subset of fields the free-text term is
    /// matched against; exact clauses are not restricted to it.
    pub fn matches<R: Record>(&self, record: &R, searchable_fields: &[&str]) -> bool {
        self.search_clause(record, searchable_fields)
            && self
                .exact
                .iter()
                .all(|(field, expected)| exact_clause(record, field, expected))
    }

    fn search_clause<R: Record>(&self, record: &R, searchable_fields: &[&str]) -> bool {
        let term = match self.search.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => return true,
        };

        searchable_fields.iter().any(|field| {
            record
                .field_value(field)
                .is_some_and(|value| value.contains_ci(term))
        })
    }
}

fn exact_clause<R: Record>(record: &R, field: &str, expected: &FieldValue) -> bool {
    if exact_clause_is_vacuous(expected) {
        return true;
    }
    match record.field_value(field) {
        Some(actual) => actual == *expected,
        None => false,
    }
}

fn exact_clause_is_vacuous(expected: &FieldValue) -> bool {
    match expected {
        FieldValue::Null => true,
        FieldValue::String(s) => s.is_empty() || s == MATCH_ALL,
        _ => false,
    }
}
