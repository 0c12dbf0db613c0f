//! Integration tests for InMemoryEntityService using the storage test harness.
//!
//! This file invokes `entity_service_tests!` to validate that
//! InMemoryEntityService fully conforms to the EntityService<T> contract.

#[macro_use]
mod storage_harness;

use storage_harness::*;
use stayops::storage::InMemoryEntityService;

entity_service_tests!(InMemoryEntityService::<TestRecord>::new());
