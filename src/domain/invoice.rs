//! Invoice records and billing summary helpers
//!
//! The invoice's `name` is its human-facing number ("INV-0042"). Status
//! values follow the billing backend: "paid", "pending", "overdue",
//! "cancelled".

use indexmap::IndexMap;

use crate::impl_record;
use crate::query::aggregate;

impl_record!(
    Invoice,
    "invoice", "invoices",
    searchable: ["name"],
    tenant: hotel_id,
    {
        hotel_id: ::uuid::Uuid,
        total_amount: f64,
    }
);

impl Invoice {
    /// Sum of `total_amount` grouped by status, for the billing dashboard
    /// tiles. Computed over whatever slice the caller passes — typically the
    /// full fetched set, never a single page.
    pub fn totals_by_status(invoices: &[Invoice]) -> IndexMap<String, f64> {
        aggregate::sum_by(invoices, "status", "total_amount")
    }
}
