//! Console list configuration loading and management
//!
//! Each console screen gets its list defaults (page size, initial sort,
//! searchable-field override) from configuration rather than code, so the
//! admin console and hotel panel can tune screens without a redeploy. The
//! page-reset-on-filter-change rule stays with the caller; config only
//! supplies defaults.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{ConfigError, OpsResult};
use crate::query::{PageRequest, SortDescriptor, DEFAULT_PER_PAGE};

/// List defaults for one console resource (e.g. "invoices")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSettings {
    /// Plural resource name this applies to
    pub resource: String,

    /// Page size the screen opens with
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Initial sort expression (`field:asc` / `field:desc`)
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Override of the record type's searchable fields
    #[serde(default)]
    pub searchable: Option<Vec<String>>,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl ListSettings {
    /// The sort descriptor this screen opens with
    pub fn sort_descriptor(&self) -> SortDescriptor {
        match self.default_sort.as_deref() {
            Some(expr) => SortDescriptor::parse(expr),
            None => SortDescriptor::unsorted(),
        }
    }

    /// A page request for the given page number at this screen's page size
    pub fn page_request(&self, page: usize) -> PageRequest {
        PageRequest::new(page, self.per_page)
    }

    /// Searchable-field override as borrowed names, if configured
    pub fn searchable_fields(&self) -> Option<Vec<&str>> {
        self.searchable
            .as_ref()
            .map(|fields| fields.iter().map(String::as_str).collect())
    }
}

/// Complete list configuration for a console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Per-resource list settings
    pub lists: Vec<ListSettings>,
}

impl ConsoleConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> OpsResult<Self> {
        debug!(path, "loading console config");
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Find the settings for a resource, if configured
    pub fn settings_for(&self, resource: &str) -> Option<&ListSettings> {
        self.lists.iter().find(|s| s.resource == resource)
    }

    /// Validate loaded settings.
    ///
    /// Page sizes must be at least 1 and sort expressions must name a field;
    /// everything else is permissive (unknown resources are simply unused).
    pub fn validate(&self) -> OpsResult<()> {
        for settings in &self.lists {
            if settings.per_page < 1 {
                return Err(ConfigError::InvalidValue {
                    field: format!("lists.{}.per_page", settings.resource),
                    value: settings.per_page.to_string(),
                    message: "page size must be at least 1".to_string(),
                }
                .into());
            }
            if let Some(expr) = settings.default_sort.as_deref() {
                let descriptor = SortDescriptor::parse(expr);
                if descriptor.field.as_deref().is_none_or(str::is_empty) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("lists.{}.default_sort", settings.resource),
                        value: expr.to_string(),
                        message: "sort expression must name a field".to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Create a default configuration covering the standard console screens
    pub fn default_config() -> Self {
        let screen = |resource: &str, default_sort: &str| ListSettings {
            resource: resource.to_string(),
            per_page: DEFAULT_PER_PAGE,
            default_sort: Some(default_sort.to_string()),
            searchable: None,
        };

        Self {
            lists: vec![
                screen("hotels", "name:asc"),
                screen("kiosks", "name:asc"),
                screen("invoices", "created_at:desc"),
                screen("subscriptions", "created_at:desc"),
                screen("rooms", "name:asc"),
                screen("guests", "name:asc"),
                screen("team_members", "name:asc"),
                screen("audit_entries", "created_at:desc"),
                screen("incidents", "created_at:desc"),
            ],
        }
    }
}
