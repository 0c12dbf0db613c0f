//! Subscription plan records (platform-wide, admin console)

use crate::impl_record;

impl_record!(
    Plan,
    "plan", "plans",
    searchable: ["name"],
    {
        monthly_price: f64,
        max_kiosks: i64,
    }
);
