//! Shared test harness for entity service backend testing
//!
//! Provides `TestRecord`, declared through `impl_record!` with fields
//! covering the string, integer, float, and boolean `FieldValue` variants,
//! plus helper constructors for batches of test data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

use stayops::impl_record;

impl_record!(
    TestRecord,
    "test_record", "test_records",
    searchable: ["name", "email"],
    {
        email: String,
        age: i64,
        score: f64,
        active: bool,
    }
);

/// Install the test log subscriber; later calls are no-ops.
///
/// Run with `RUST_LOG=stayops=debug` to see store mutation events.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a single test record with the usual defaults
pub fn create_test_record(name: &str, email: &str, age: i64, score: f64, active: bool) -> TestRecord {
    TestRecord::new(
        name.to_string(),
        "active".to_string(),
        email.to_string(),
        age,
        score,
        active,
    )
}

/// Build `n` distinct records (Guest 0, Guest 1, ...) with spread-out fields
pub fn sample_batch(n: usize) -> Vec<TestRecord> {
    (0..n)
        .map(|i| {
            create_test_record(
                &format!("Guest {i}"),
                &format!("guest{i}@test.example"),
                20 + i as i64,
                i as f64 * 0.5,
                i % 2 == 0,
            )
        })
        .collect()
}

#[macro_use]
pub mod entity_service_tests;
