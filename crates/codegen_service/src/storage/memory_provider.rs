use std::num::NonZeroUsize;

use async_trait::async_trait;
use chrono::Utc;
use lru::LruCache;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::provider::GenerationStoreProvider;
use crate::models::CodeGeneration;

const DEFAULT_CAPACITY: usize = 1000;

/// In-memory generation store, bounded at `capacity` records.
///
/// Inserting into a full store evicts the oldest record. Lookups use
/// `peek`, so reads never disturb the eviction order and entries stay in
/// insertion order, which is creation order: iteration yields newest first.
pub struct MemoryStorageProvider {
    records: RwLock<LruCache<Uuid, CodeGeneration>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or_else(|| NonZeroUsize::new(DEFAULT_CAPACITY).unwrap());
        Self {
            records: RwLock::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationStoreProvider for MemoryStorageProvider {
    async fn create(
        &self,
        prompt: String,
        language: String,
        generated_code: String,
    ) -> CodeGeneration {
        let mut records = self.records.write().await;

        // Clamp against the newest stored record so a wall-clock step
        // backwards cannot reorder history.
        let now = Utc::now();
        let created_at = match records.iter().next() {
            Some((_, newest)) if newest.created_at > now => newest.created_at,
            _ => now,
        };

        let record = CodeGeneration {
            id: Uuid::new_v4(),
            prompt,
            language,
            generated_code,
            created_at,
        };
        records.push(record.id, record.clone());
        record
    }

    async fn get(&self, id: Uuid) -> Option<CodeGeneration> {
        self.records.read().await.peek(&id).cloned()
    }

    async fn list_recent(&self, limit: i64) -> Vec<CodeGeneration> {
        if limit <= 0 {
            return Vec::new();
        }
        let records = self.records.read().await;
        records
            .iter()
            .take(limit as usize)
            .map(|(_, record)| record.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    async fn create(store: &MemoryStorageProvider, prompt: &str) -> CodeGeneration {
        store
            .create(prompt.to_string(), "rust".to_string(), "// code".to_string())
            .await
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryStorageProvider::new();
        let record = create(&store, "sort a list").await;

        let found = store.get(record.id).await.unwrap();
        assert_eq!(found, record);
        assert_eq!(found.prompt, "sort a list");
        assert_eq!(found.language, "rust");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = MemoryStorageProvider::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_list_recent_newest_first() {
        let store = MemoryStorageProvider::new();
        let first = create(&store, "first").await;
        let second = create(&store, "second").await;
        let third = create(&store, "third").await;
        assert!(first.created_at <= second.created_at);
        assert!(second.created_at <= third.created_at);

        let recent = store.list_recent(2).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, third.id);
        assert_eq!(recent[1].id, second.id);
    }

    #[tokio::test]
    async fn test_list_recent_zero_or_negative_limit_is_empty() {
        let store = MemoryStorageProvider::new();
        create(&store, "anything").await;

        assert!(store.list_recent(0).await.is_empty());
        assert!(store.list_recent(-3).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_recent_limit_larger_than_store_returns_all() {
        let store = MemoryStorageProvider::new();
        create(&store, "one").await;
        let newest = create(&store, "two").await;

        let recent = store.list_recent(50).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, newest.id);
    }

    #[tokio::test]
    async fn test_list_recent_is_idempotent() {
        let store = MemoryStorageProvider::new();
        for prompt in ["a", "b", "c"] {
            create(&store, prompt).await;
        }

        let first_read = store.list_recent(5).await;
        let second_read = store.list_recent(5).await;
        assert_eq!(first_read, second_read);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let store = MemoryStorageProvider::with_capacity(2);
        let oldest = create(&store, "oldest").await;
        create(&store, "middle").await;
        let newest = create(&store, "newest").await;

        assert!(store.get(oldest.id).await.is_none());
        let recent = store.list_recent(10).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, newest.id);
    }

    #[tokio::test]
    async fn test_concurrent_creates_assign_distinct_ids() {
        let store = Arc::new(MemoryStorageProvider::new());

        let creates = (0..32).map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(format!("prompt {i}"), "rust".to_string(), "// code".to_string())
                    .await
            })
        });
        let records: Vec<CodeGeneration> = futures::future::join_all(creates)
            .await
            .into_iter()
            .map(|handle| handle.unwrap())
            .collect();

        let ids: HashSet<Uuid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 32);
        assert_eq!(store.list_recent(100).await.len(), 32);
    }
}
