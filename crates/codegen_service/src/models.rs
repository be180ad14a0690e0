use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored result of a successful generation request.
///
/// Immutable once created; `id` is never reused within a process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeGeneration {
    pub id: Uuid,
    pub prompt: String,
    pub language: String,
    pub generated_code: String,
    pub created_at: DateTime<Utc>,
}
