use async_trait::async_trait;
use uuid::Uuid;

use crate::models::CodeGeneration;

#[async_trait]
pub trait GenerationStoreProvider: Send + Sync {
    /// Store a new generation result under a fresh id and return the full
    /// record. Infallible; id assignment is atomic under concurrent calls.
    async fn create(
        &self,
        prompt: String,
        language: String,
        generated_code: String,
    ) -> CodeGeneration;

    /// Exact lookup by id.
    async fn get(&self, id: Uuid) -> Option<CodeGeneration>;

    /// At most `limit` records, newest first. `limit <= 0` yields an empty
    /// list; a `limit` larger than the store yields everything.
    async fn list_recent(&self, limit: i64) -> Vec<CodeGeneration>;
}
