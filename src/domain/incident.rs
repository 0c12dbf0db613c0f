//! Incident records (hotel-panel, scoped to a property)

use crate::impl_record;

impl_record!(
    Incident,
    "incident", "incidents",
    searchable: ["name", "severity"],
    tenant: hotel_id,
    {
        hotel_id: ::uuid::Uuid,
        severity: String,
        kiosk_id: Option<::uuid::Uuid>,
    }
);
