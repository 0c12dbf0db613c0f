//! Audit log entries (platform-wide, admin console)
//!
//! The entry's `name` is the rendered summary line; `actor` and `action`
//! carry the structured parts the list can filter on.

use crate::impl_record;

impl_record!(
    AuditEntry,
    "audit_entry", "audit_entries",
    searchable: ["name", "actor", "action"],
    {
        actor: String,
        action: String,
    }
);
