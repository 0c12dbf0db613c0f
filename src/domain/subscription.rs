//! Subscription records tying a hotel to a plan

use crate::impl_record;

impl_record!(
    Subscription,
    "subscription", "subscriptions",
    searchable: ["name"],
    tenant: hotel_id,
    {
        hotel_id: ::uuid::Uuid,
        plan_id: ::uuid::Uuid,
        current_period_end: ::chrono::DateTime<::chrono::Utc>,
    }
);
