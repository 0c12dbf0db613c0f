//! In-memory implementation of EntityService for testing and development

use crate::core::entity::Record;
use crate::core::error::EntityError;
use crate::core::service::EntityService;
use crate::query::{ListQuery, PageResult};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;
use uuid::Uuid;

/// In-memory entity service implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Not a persistence layer: contents live and die with the process.
#[derive(Clone)]
pub struct InMemoryEntityService<T: Record> {
    entities: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Record> InMemoryEntityService<T> {
    /// Create a new in-memory entity service
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot the store in creation order.
    ///
    /// HashMap iteration order is arbitrary; normalizing the snapshot to
    /// (created_at, id) order gives `list` and `query` a deterministic
    /// baseline, which the pipeline's stable sort then preserves for
    /// records its comparator considers equal.
    fn snapshot(&self) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut rows: Vec<T> = entities.values().cloned().collect();
        rows.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(rows)
    }
}

impl<T: Record> Default for InMemoryEntityService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> EntityService<T> for InMemoryEntityService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        debug!(entity_type = entity.entity_type(), id = %entity.id(), "creating entity");
        entities.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        self.snapshot()
    }

    async fn update(&self, id: &Uuid, entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if !entities.contains_key(id) {
            return Err(EntityError::NotFound {
                entity_type: T::resource_name_singular().to_string(),
                id: *id,
            }
            .into());
        }

        debug!(entity_type = entity.entity_type(), id = %id, "updating entity");
        entities.insert(*id, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        debug!(id = %id, "deleting entity");
        entities.remove(id);

        Ok(())
    }

    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>> {
        let rows = self.snapshot()?;
        Ok(rows
            .into_iter()
            .filter(|entity| {
                entity
                    .field_value(field)
                    .is_some_and(|v| v.group_key() == value)
            })
            .collect())
    }

    async fn query(&self, query: &ListQuery) -> Result<PageResult<T>> {
        let rows = self.snapshot()?;
        Ok(query.run(&rows))
    }
}
