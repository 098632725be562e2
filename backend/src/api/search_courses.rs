//! Full-scan course search over the key-value store.

use common::course_record::{COURSE_KEY_PREFIX, CourseRecord};

use crate::store::{CourseStore, RedisCourseStore};

/// Returns every course whose code or name contains `query` as a
/// case-insensitive substring.
///
/// Enumerates all record keys, fetches each record and applies the substring
/// predicate. A linear scan is fine at catalog scale; the store trait keeps
/// the door open for an indexed replacement. The empty query matches every
/// record and must stay that way. Results are sorted by code because the
/// store's enumeration order is not stable across calls.
pub async fn search_courses<S: CourseStore>(
    store: &S,
    query: &str,
) -> anyhow::Result<Vec<CourseRecord>> {
    let query_lower = query.to_lowercase();

    let keys = store.list_keys(COURSE_KEY_PREFIX).await?;
    tracing::debug!("course search: scanning {} keys for {:?}", keys.len(), query);

    let mut results = Vec::new();
    for key in keys {
        let fields = store.get_record(&key).await?;
        if fields.is_empty() {
            // Key vanished between enumeration and fetch; matches nothing.
            continue;
        }
        let record = CourseRecord::from_fields(&fields);
        if record.matches_query(&query_lower) {
            results.push(record);
        }
    }

    results.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(results)
}

/// Endpoint-shaped wrapper: builds the Redis store from the environment and
/// runs the scan. The frontend server function calls this.
pub async fn search_courses_from_env(query: String) -> anyhow::Result<Vec<CourseRecord>> {
    let store = RedisCourseStore::from_env()?;
    let results = search_courses(&store, &query).await.inspect_err(|e| {
        tracing::error!("course search failed for {:?}: {}", query, e);
    })?;
    Ok(results)
}
