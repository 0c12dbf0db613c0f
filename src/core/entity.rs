//! Entity and record traits defining the core abstraction for all listed data

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::field::FieldValue;

/// Base metadata shared by every listed entity type.
///
/// Every console record carries an id, a type name, creation/update
/// timestamps, a soft-delete marker, and a status string. Platform-wide
/// types (hotels, plans, audit entries) keep the default `tenant_id()`;
/// hotel-panel types override it with their owning hotel's id so a
/// property's staff only ever queries its own records.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Plural resource name used by consoles and configs (e.g. "hotels")
    fn resource_name() -> &'static str;

    /// Singular resource name (e.g. "hotel")
    fn resource_name_singular() -> &'static str;

    fn id(&self) -> Uuid;

    fn entity_type(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// Soft-delete timestamp, if the entity has been removed
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn status(&self) -> &str;

    /// Owning hotel for multi-tenant isolation; `None` for platform-wide types
    fn tenant_id(&self) -> Option<Uuid> {
        None
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }

    /// Active means status "active" and not soft-deleted
    fn is_active(&self) -> bool {
        self.status() == "active" && !self.is_deleted()
    }
}

/// Trait for records that can flow through the list query pipeline.
///
/// The pipeline never reaches into a struct dynamically; every field the
/// filter or sort can touch goes through `field_value`, which resolves a
/// field name to a [`FieldValue`] or `None`. A missing field is treated as
/// non-matching by filters and as incomparable by sorts, never as an error.
pub trait Record: Entity {
    /// Human-readable name of this record
    fn name(&self) -> &str;

    /// Fields eligible for free-text search, in match priority order
    fn searchable_fields() -> &'static [&'static str];

    /// Resolve a field name to its current value
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
