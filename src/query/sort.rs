//! Sort descriptor and stable comparator application
//!
//! Stability is load-bearing here: records that compare equal (including
//! every pair under an unset sort field, and mixed-type values under the
//! incomparable-compares-equal policy) must keep their relative input order.
//! `Vec::sort_by` guarantees a stable sort, so applying the comparator
//! through it preserves exactly that.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::Record;

/// Ordering direction for sorted queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (smallest first)
    #[default]
    Asc,
    /// Descending order (largest first)
    Desc,
}

impl SortDirection {
    /// Parse `"asc"` / `"desc"`; anything else defaults to ascending
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Field name and direction used to order records.
///
/// A `None` field yields the identity comparator: under a stable sort the
/// input order is preserved untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(default)]
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// No reordering
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by `field` ascending
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Asc,
        }
    }

    /// Sort by `field` descending
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Desc,
        }
    }

    /// Parse the console wire form `"field:asc"` / `"field:desc"` / `"field"`.
    ///
    /// An empty expression yields the unsorted descriptor.
    pub fn parse(expr: &str) -> Self {
        let expr = expr.trim();
        if expr.is_empty() {
            return Self::unsorted();
        }
        match expr.split_once(':') {
            Some((field, dir)) => Self {
                field: Some(field.trim().to_string()),
                direction: SortDirection::parse(dir),
            },
            None => Self {
                field: Some(expr.to_string()),
                direction: SortDirection::Asc,
            },
        }
    }

    /// Compare two records under this descriptor.
    ///
    /// Values absent on either side compare equal, as do mixed or
    /// unorderable type combinations (see [`FieldValue::compare`]).
    ///
    /// [`FieldValue::compare`]: crate::core::FieldValue::compare
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let field = match self.field.as_deref() {
            Some(f) => f,
            None => return Ordering::Equal,
        };

        let ordering = match (a.field_value(field), b.field_value(field)) {
            (Some(va), Some(vb)) => va.compare(&vb),
            _ => Ordering::Equal,
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort of a record vector
    pub fn apply<R: Record>(&self, rows: &mut Vec<R>) {
        if self.field.is_some() {
            rows.sort_by(|a, b| self.compare(a, b));
        }
    }
}
