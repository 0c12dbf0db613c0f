//! Check-in kiosk records (hotel-panel, scoped to a property)

use crate::impl_record;

impl_record!(
    Kiosk,
    "kiosk", "kiosks",
    searchable: ["name", "location"],
    tenant: hotel_id,
    {
        hotel_id: ::uuid::Uuid,
        location: String,
        firmware_version: String,
    }
);
