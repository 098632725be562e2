//! Read-only key-value store abstraction for course records.
//!
//! The search service only ever enumerates keys and fetches field mappings;
//! record lifecycle (seeding, deletion) belongs to the ingestion side. Keeping
//! the trait this narrow lets the linear scan be swapped for an indexed
//! structure later without touching the service contract, and lets tests run
//! against [`memory_store::MemoryCourseStore`].

use std::collections::BTreeMap;

pub mod memory_store;
pub mod redis_store;

pub use memory_store::MemoryCourseStore;
pub use redis_store::RedisCourseStore;

#[allow(async_fn_in_trait)]
pub trait CourseStore {
    /// All keys under `prefix`, reflecting store state at call time.
    /// Enumeration order is not guaranteed stable across calls.
    async fn list_keys(&self, prefix: &str) -> anyhow::Result<Vec<String>>;

    /// Full field mapping for one key. A key that vanished between
    /// enumeration and fetch yields an empty mapping, not an error.
    async fn get_record(&self, key: &str) -> anyhow::Result<BTreeMap<String, String>>;
}
