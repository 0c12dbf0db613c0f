//! Service trait for entity stores

use crate::core::Record;
use crate::query::{ListQuery, PageResult};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing a single entity type.
///
/// Implementations provide CRUD operations plus list querying for a specific
/// entity type. The toolkit is agnostic to the underlying storage mechanism;
/// the bundled [`InMemoryEntityService`](crate::storage::InMemoryEntityService)
/// backs tests and development, and callers wire production backends the same
/// way.
///
/// The `query` operation is the only list-shaped read the consoles use: it
/// snapshots the store and runs the filter/sort/paginate pipeline over the
/// snapshot, so totals always reflect the filtered count.
#[async_trait]
pub trait EntityService<T: Record>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all entities, in creation order
    async fn list(&self) -> Result<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, id: &Uuid, entity: T) -> Result<T>;

    /// Delete an entity
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// Search entities by exact field value
    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>>;

    /// Run a list query (filter, sort, paginate) over the store's contents
    async fn query(&self, query: &ListQuery) -> Result<PageResult<T>>;
}
