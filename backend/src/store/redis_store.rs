//! Redis-backed course store.

use std::collections::BTreeMap;

use redis::AsyncCommands;

use super::CourseStore;

/// Thin adapter over a Redis instance holding one hash per course under
/// `course:<code>`. Constructed explicitly and handed to the search service;
/// there is no process-wide connection singleton.
#[derive(Clone)]
pub struct RedisCourseStore {
    client: redis::Client,
}

impl RedisCourseStore {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }

    /// Reads `REDIS_URL`, falling back to a local instance.
    pub fn from_env() -> anyhow::Result<Self> {
        let url =
            std::env::var("REDIS_URL").unwrap_or("redis://127.0.0.1:6379".to_string());
        Self::new(&url)
    }

    async fn connection(&self) -> anyhow::Result<redis::aio::MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

impl CourseStore for RedisCourseStore {
    async fn list_keys(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        let mut conn = self.connection().await?;
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(format!("{prefix}*"))
            .query_async(&mut conn)
            .await?;
        Ok(keys)
    }

    async fn get_record(&self, key: &str) -> anyhow::Result<BTreeMap<String, String>> {
        let mut conn = self.connection().await?;
        // HGETALL on an absent key returns an empty mapping, which is exactly
        // the contract for a key that vanished after enumeration.
        let fields: BTreeMap<String, String> = conn.hgetall(key).await?;
        Ok(fields)
    }
}
