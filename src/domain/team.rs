//! Team member records and the role/permission editor
//!
//! Permissions are module identifiers ("rooms", "invoices", "guests", ...)
//! toggled on or off per role in the hotel panel's role editor. The editor
//! operates on a small in-memory set and preserves the order modules were
//! granted in, which is the order the console renders them.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::impl_record;

impl_record!(
    TeamMember,
    "team_member", "team_members",
    searchable: ["name", "email", "role"],
    tenant: hotel_id,
    {
        hotel_id: ::uuid::Uuid,
        email: String,
        role: String,
    }
);

/// An editable set of module permissions for one role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    modules: IndexSet<String>,
}

impl PermissionSet {
    /// An empty permission set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from granted module identifiers
    pub fn from_modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the role can access a module
    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    /// Grant access to a module; returns true if it was newly granted
    pub fn grant(&mut self, module: impl Into<String>) -> bool {
        self.modules.insert(module.into())
    }

    /// Revoke access to a module; returns true if it was granted before
    pub fn revoke(&mut self, module: &str) -> bool {
        self.modules.shift_remove(module)
    }

    /// Flip a module's access; returns the new state (true = granted)
    pub fn toggle(&mut self, module: &str) -> bool {
        if self.modules.contains(module) {
            self.modules.shift_remove(module);
            false
        } else {
            self.modules.insert(module.to_string());
            true
        }
    }

    /// Grant every module in the list (the editor's "select all")
    pub fn grant_all<'a, I: IntoIterator<Item = &'a str>>(&mut self, modules: I) {
        for module in modules {
            self.modules.insert(module.to_string());
        }
    }

    /// Revoke everything (the editor's "clear")
    pub fn clear(&mut self) {
        self.modules.clear();
    }

    /// Granted modules, in grant order
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
