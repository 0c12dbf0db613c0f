//! Hotel records (platform-wide, admin console)

use crate::impl_record;

impl_record!(
    Hotel,
    "hotel", "hotels",
    searchable: ["name", "city"],
    {
        city: String,
        room_count: i64,
    }
);
