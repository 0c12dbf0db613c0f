//! Derived summary math over record sets
//!
//! Aggregation is deliberately a separate concern from the list pipeline:
//! the consoles compute their dashboard tiles (invoice totals by status,
//! room counts by state, occupancy percentages) over the full record set,
//! while the pipeline only ever shapes one page. Keeping the two apart means
//! a summary never depends on pagination state.

use indexmap::IndexMap;

use crate::core::Record;

/// Sum a numeric field, grouped by another field's value.
///
/// Group keys are the grouping value's string form, in first-seen order.
/// Records missing either field, or whose value field is non-numeric, are
/// skipped rather than erroring.
pub fn sum_by<R: Record>(rows: &[R], group_field: &str, value_field: &str) -> IndexMap<String, f64> {
    let mut sums: IndexMap<String, f64> = IndexMap::new();
    for row in rows {
        let (Some(group), Some(value)) = (row.field_value(group_field), row.field_value(value_field))
        else {
            continue;
        };
        let Some(amount) = value.as_number() else {
            continue;
        };
        *sums.entry(group.group_key()).or_insert(0.0) += amount;
    }
    sums
}

/// Count records grouped by a field's value, in first-seen order.
pub fn count_by<R: Record>(rows: &[R], group_field: &str) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for row in rows {
        let Some(group) = row.field_value(group_field) else {
            continue;
        };
        *counts.entry(group.group_key()).or_insert(0) += 1;
    }
    counts
}

/// Percentage of `part` in `whole`, as a 0–100 value; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64) * 100.0
}
