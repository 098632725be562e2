//! Course catalog record as stored in the key-value store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stored field names, kept exactly as the catalog writes them.
pub const FIELD_CODE: &str = "Mã học phần";
pub const FIELD_NAME: &str = "Tên học phần";
pub const FIELD_DURATION: &str = "Thời lượng";
pub const FIELD_CREDITS: &str = "Tín chỉ";
pub const FIELD_WEIGHT: &str = "Trọng số";

/// Key namespace for course records in the store.
pub const COURSE_KEY_PREFIX: &str = "course:";

/// One catalog entry. `code` is the unique identifier (the store keys records
/// under `course:<code>`); `name` is the human-readable title. The remaining
/// fields are display-only and never searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CourseRecord {
    #[serde(rename = "Mã học phần")]
    pub code: String,
    #[serde(rename = "Tên học phần")]
    pub name: String,
    #[serde(rename = "Thời lượng")]
    pub duration: String,
    #[serde(rename = "Tín chỉ")]
    pub credits: String,
    #[serde(rename = "Trọng số")]
    pub weight: String,
}

impl CourseRecord {
    /// Builds a record from a raw store field mapping. A missing field becomes
    /// the empty string so a partial record can still match on the fields it
    /// does carry.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let get = |name: &str| fields.get(name).cloned().unwrap_or_default();
        Self {
            code: get(FIELD_CODE),
            name: get(FIELD_NAME),
            duration: get(FIELD_DURATION),
            credits: get(FIELD_CREDITS),
            weight: get(FIELD_WEIGHT),
        }
    }

    /// Case-insensitive substring match over `code` and `name`.
    /// `query_lower` must already be lower-cased. The empty query matches
    /// every record, since the empty string is a substring of every string.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.code.to_lowercase().contains(query_lower)
            || self.name.to_lowercase().contains(query_lower)
    }

    /// The key this record lives under in the store.
    pub fn store_key(&self) -> String {
        format!("{}{}", COURSE_KEY_PREFIX, self.code)
    }
}
