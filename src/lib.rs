//! # stayops
//!
//! The shared list-processing core of a multi-tenant hotel-operations
//! product: the admin console and the per-property hotel panel both render
//! lists (hotels, kiosks, invoices, subscriptions, rooms, guests, team
//! members, audit entries, incidents) through the same
//! filter → sort → paginate pipeline over an in-memory record array.
//!
//! ## Features
//!
//! - **List Query Pipeline**: one pure, synchronous pipeline instead of a
//!   per-screen copy of the same slice-and-count arithmetic
//! - **Explicit field access**: records resolve field names through
//!   [`Record::field_value`], never by reflection
//! - **Total by construction**: out-of-range pages clamp, unset sort fields
//!   preserve order, incomparable values compare equal — no error paths
//! - **Stable sort**: equal-keyed records keep their input order
//! - **Thin entity adapters**: `impl_record!` declares a screen's record
//!   shape, searchable fields, and hotel scoping in one place
//! - **Derived summaries**: aggregation (totals by status, occupancy
//!   percentages) lives beside, never inside, the pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use stayops::prelude::*;
//!
//! let hotels = vec![
//!     Hotel::new("Grand Budapest".into(), "active".into(), "Zubrowka".into(), 60),
//!     Hotel::new("Seaside Inn".into(), "inactive".into(), "Porto".into(), 18),
//!     Hotel::new("Grand Lisboa".into(), "active".into(), "Lisbon".into(), 42),
//! ];
//!
//! let query = ListQuery::new(
//!     FilterDescriptor::none().search("grand").exact("status", "active"),
//!     SortDescriptor::asc("name"),
//!     PageRequest::new(1, 10),
//! );
//!
//! let page = query.run(&hotels);
//! assert_eq!(page.meta.total_items, 2);
//! assert_eq!(page.items[0].name, "Grand Budapest");
//! ```
//!
//! The surrounding application owns everything else: fetching the record
//! array, debouncing search input, and resetting to page 1 whenever the
//! filter or sort changes.

pub mod config;
pub mod core;
pub mod domain;
pub mod query;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, Record},
        error::{OpsError, OpsResult},
        field::{FieldFormat, FieldValue, ToFieldValue},
        service::EntityService,
    };

    // === Query Pipeline ===
    pub use crate::query::{
        aggregate, FilterDescriptor, ListParams, ListQuery, PageMeta, PageRequest, PageResult,
        SortDescriptor, SortDirection,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Domain ===
    pub use crate::domain::{
        AuditEntry, Guest, Hotel, Incident, Invoice, Kiosk, PermissionSet, Plan, Room, RoomStatus,
        Subscription, TeamMember,
    };

    // === Storage ===
    pub use crate::storage::InMemoryEntityService;

    // === Config ===
    pub use crate::config::{ConsoleConfig, ListSettings};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
