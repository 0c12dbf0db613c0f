//! Macro-generated test suite for `EntityService<TestRecord>` contract validation.
//!
//! The `entity_service_tests!` macro generates a test module that validates
//! any `EntityService<TestRecord>` implementation against the full contract:
//! CRUD operations, field search, list querying through the pipeline, and
//! concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use stayops::storage::InMemoryEntityService;
//!
//! entity_service_tests!(InMemoryEntityService::<TestRecord>::new());
//! ```

/// Generate a full `EntityService<TestRecord>` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance
/// implementing `EntityService<TestRecord>`. It is re-evaluated for each
/// test to ensure isolation. For the concurrent access test, the returned
/// service must also implement `Clone + 'static`.
#[macro_export]
macro_rules! entity_service_tests {
    ($factory:expr) => {
        mod entity_service_contract_tests {
            use super::*;
            use stayops::core::entity::{Entity, Record};
            use stayops::core::service::EntityService;
            use stayops::query::{FilterDescriptor, ListQuery, PageRequest, SortDescriptor};
            use uuid::Uuid;

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                init_test_logging();
                let service = $factory;
                let record = create_test_record("Alice", "alice@test.example", 30, 4.5, true);
                let original_id = record.id;

                let created = service.create(record).await.unwrap();
                assert_eq!(created.id(), original_id);
                assert_eq!(created.name(), "Alice");
                assert_eq!(created.entity_type(), "test_record");

                let retrieved = service.get(&original_id).await.unwrap();
                assert!(retrieved.is_some(), "Record should exist after create");
                let retrieved = retrieved.unwrap();
                assert_eq!(retrieved.email, "alice@test.example");
                assert_eq!(retrieved.age, 30);
                assert!((retrieved.score - 4.5).abs() < f64::EPSILON);
                assert!(retrieved.active);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                let result = service.get(&Uuid::new_v4()).await.unwrap();
                assert!(result.is_none());
            }

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;
                let all = service.list().await.unwrap();
                assert!(all.is_empty());
            }

            #[tokio::test]
            async fn test_list_is_deterministic() {
                let service = $factory;
                let batch = sample_batch(5);
                let mut expected: Vec<Uuid> = batch.iter().map(|r| r.id).collect();
                expected.sort();

                for record in batch {
                    service.create(record).await.unwrap();
                }

                let first: Vec<Uuid> = service.list().await.unwrap().iter().map(|r| r.id()).collect();
                let second: Vec<Uuid> = service.list().await.unwrap().iter().map(|r| r.id()).collect();
                assert_eq!(first, second, "list order must not vary between calls");

                let mut listed = first;
                listed.sort();
                assert_eq!(listed, expected, "list should contain every created record");
            }

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let mut record = service
                    .create(create_test_record("Bob", "bob@test.example", 41, 2.0, false))
                    .await
                    .unwrap();

                record.name = "Robert".to_string();
                record.touch();
                let updated = service.update(&record.id, record.clone()).await.unwrap();
                assert_eq!(updated.name(), "Robert");

                let retrieved = service.get(&record.id).await.unwrap().unwrap();
                assert_eq!(retrieved.name(), "Robert");
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let ghost = create_test_record("Ghost", "ghost@test.example", 0, 0.0, false);
                let result = service.update(&ghost.id, ghost.clone()).await;
                assert!(result.is_err(), "updating an unknown id should fail");
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let record = service
                    .create(create_test_record("Carol", "carol@test.example", 28, 3.0, true))
                    .await
                    .unwrap();

                service.delete(&record.id).await.unwrap();
                assert!(service.get(&record.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent_is_ok() {
                let service = $factory;
                // deletes are idempotent
                service.delete(&Uuid::new_v4()).await.unwrap();
            }

            // ==================================================================
            // Search
            // ==================================================================

            #[tokio::test]
            async fn test_search_string_field() {
                let service = $factory;
                for record in sample_batch(3) {
                    service.create(record).await.unwrap();
                }

                let found = service.search("email", "guest1@test.example").await.unwrap();
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].name(), "Guest 1");
            }

            #[tokio::test]
            async fn test_search_integer_field() {
                let service = $factory;
                for record in sample_batch(4) {
                    service.create(record).await.unwrap();
                }

                let found = service.search("age", "22").await.unwrap();
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].age, 22);
            }

            #[tokio::test]
            async fn test_search_boolean_field() {
                let service = $factory;
                for record in sample_batch(4) {
                    service.create(record).await.unwrap();
                }

                let found = service.search("active", "true").await.unwrap();
                assert_eq!(found.len(), 2);
            }

            #[tokio::test]
            async fn test_search_no_results() {
                let service = $factory;
                for record in sample_batch(3) {
                    service.create(record).await.unwrap();
                }

                let found = service.search("email", "nobody@test.example").await.unwrap();
                assert!(found.is_empty());
            }

            #[tokio::test]
            async fn test_search_unknown_field() {
                let service = $factory;
                for record in sample_batch(3) {
                    service.create(record).await.unwrap();
                }

                let found = service.search("nonexistent", "whatever").await.unwrap();
                assert!(found.is_empty());
            }

            // ==================================================================
            // List querying
            // ==================================================================

            #[tokio::test]
            async fn test_query_filters_sorts_and_paginates() {
                let service = $factory;
                for record in sample_batch(10) {
                    service.create(record).await.unwrap();
                }

                // the 5 even-indexed records are active; sort oldest-age last
                let query = ListQuery::new(
                    FilterDescriptor::none().exact("active", true),
                    SortDescriptor::desc("age"),
                    PageRequest::new(2, 2),
                );
                let result = service.query(&query).await.unwrap();

                assert_eq!(result.meta.total_items, 5);
                assert_eq!(result.meta.total_pages, 3);
                let ages: Vec<i64> = result.items.iter().map(|r| r.age).collect();
                assert_eq!(ages, vec![24, 22]);
            }

            #[tokio::test]
            async fn test_query_search_term() {
                let service = $factory;
                for record in sample_batch(12) {
                    service.create(record).await.unwrap();
                }

                let query = ListQuery::new(
                    FilterDescriptor::none().search("guest 1"),
                    SortDescriptor::unsorted(),
                    PageRequest::new(1, 50),
                );
                let result = service.query(&query).await.unwrap();

                // "Guest 1", "Guest 10", "Guest 11"
                assert_eq!(result.meta.total_items, 3);
            }

            #[tokio::test]
            async fn test_query_preserves_list_order_for_equal_keys() {
                let service = $factory;
                for record in sample_batch(6) {
                    service.create(record).await.unwrap();
                }

                // every record shares status "active": a stable sort on a
                // constant key must reproduce the list order untouched
                let expected: Vec<Uuid> = service.list().await.unwrap().iter().map(|r| r.id()).collect();
                let query = ListQuery::new(
                    FilterDescriptor::none(),
                    SortDescriptor::asc("status"),
                    PageRequest::new(1, 50),
                );
                let result = service.query(&query).await.unwrap();
                let ids: Vec<Uuid> = result.items.iter().map(|r| r.id()).collect();
                assert_eq!(ids, expected);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                init_test_logging();
                let service = $factory;
                let mut handles = Vec::new();

                for i in 0..10 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        let record = create_test_record(
                            &format!("Parallel {i}"),
                            &format!("parallel{i}@test.example"),
                            i,
                            0.0,
                            true,
                        );
                        service.create(record).await
                    }));
                }

                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let all = service.list().await.unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}
