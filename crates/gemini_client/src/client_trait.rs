use async_trait::async_trait;

use crate::error::CodeAssistError;

/// Capability surface of the code-assist backend.
///
/// The HTTP layer holds this as `Arc<dyn GeminiClientTrait>` so tests can
/// substitute a deterministic fake without network access.
#[async_trait]
pub trait GeminiClientTrait: Send + Sync {
    /// Generate code in `language` from a natural-language `prompt`.
    async fn generate_code(&self, prompt: &str, language: &str)
        -> Result<String, CodeAssistError>;

    /// Optimize `code`. Best-effort: any failure returns the original
    /// `code` unchanged, never an error.
    async fn optimize_code(&self, code: &str, language: &str) -> String;

    /// Explain what `code` does.
    async fn explain_code(&self, code: &str, language: &str) -> Result<String, CodeAssistError>;

    /// Find and fix issues in `code`, optionally guided by a user-reported
    /// error description.
    async fn debug_code(
        &self,
        code: &str,
        language: &str,
        error_description: Option<&str>,
    ) -> Result<String, CodeAssistError>;
}
