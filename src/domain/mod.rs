//! Console entity types
//!
//! Each module is a thin adapter over the shared pipeline: it declares the
//! record shape via `impl_record!`, names its searchable fields, and adds
//! whatever small domain logic that screen carries (the housekeeping status
//! cycle, the permission editor, billing summaries, contact validation).

pub mod audit;
pub mod guest;
pub mod hotel;
pub mod incident;
pub mod invoice;
pub mod kiosk;
pub mod macros;
pub mod plan;
pub mod room;
pub mod subscription;
pub mod team;

pub use audit::AuditEntry;
pub use guest::Guest;
pub use hotel::Hotel;
pub use incident::Incident;
pub use invoice::Invoice;
pub use kiosk::Kiosk;
pub use plan::Plan;
pub use room::{Room, RoomStatus};
pub use subscription::Subscription;
pub use team::{PermissionSet, TeamMember};
