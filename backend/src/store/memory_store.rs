//! In-memory course store for tests and local bootstrap.

use std::collections::BTreeMap;

use common::course_record::{
    CourseRecord, FIELD_CODE, FIELD_CREDITS, FIELD_DURATION, FIELD_NAME, FIELD_WEIGHT,
};

use super::CourseStore;

/// `BTreeMap`-backed store exercising the same trait as the Redis adapter.
/// Enumeration order is the map's key order, which the service must not rely
/// on anyway.
#[derive(Debug, Default, Clone)]
pub struct MemoryCourseStore {
    records: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one record per course under its `course:<code>` key.
    pub fn from_records(records: &[CourseRecord]) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert_record(record);
        }
        store
    }

    pub fn insert_record(&mut self, record: &CourseRecord) {
        let mut fields = BTreeMap::new();
        for (name, value) in [
            (FIELD_CODE, &record.code),
            (FIELD_NAME, &record.name),
            (FIELD_DURATION, &record.duration),
            (FIELD_CREDITS, &record.credits),
            (FIELD_WEIGHT, &record.weight),
        ] {
            if !value.is_empty() {
                fields.insert(name.to_string(), value.clone());
            }
        }
        self.records.insert(record.store_key(), fields);
    }

    /// Inserts a raw field mapping, for shaping partial or odd records.
    pub fn insert_fields(&mut self, key: &str, fields: BTreeMap<String, String>) {
        self.records.insert(key.to_string(), fields);
    }
}

impl CourseStore for MemoryCourseStore {
    async fn list_keys(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        Ok(self
            .records
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn get_record(&self, key: &str) -> anyhow::Result<BTreeMap<String, String>> {
        Ok(self.records.get(key).cloned().unwrap_or_default())
    }
}
