//! Google Gemini API client.

use async_trait::async_trait;
use reqwest::Client;

use crate::client_trait::GeminiClientTrait;
use crate::error::{CodeAssistError, GeminiError, Result};
use crate::models::{GenerateContentRequest, GenerateContentResponse};
use crate::prompts;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_FLASH_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_PRO_MODEL: &str = "gemini-2.5-pro";

/// Gemini API adapter for the four code-assist operations.
///
/// Generation and explanation run on the flash model; optimization and
/// debugging run on the pro model.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    flash_model: String,
    pro_model: String,
}

impl GeminiClient {
    /// Create a new client with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            flash_model: DEFAULT_FLASH_MODEL.to_string(),
            pro_model: DEFAULT_PRO_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the model used for generation and explanation.
    pub fn with_flash_model(mut self, model: impl Into<String>) -> Self {
        self.flash_model = model.into();
        self
    }

    /// Override the model used for optimization and debugging.
    pub fn with_pro_model(mut self, model: impl Into<String>) -> Self {
        self.pro_model = model.into();
        self
    }

    /// One non-streaming `generateContent` call. `Ok(None)` means the call
    /// succeeded but the model produced no text.
    async fn generate_content(
        &self,
        model: &str,
        instruction: String,
        user_text: &str,
    ) -> Result<Option<String>> {
        // Query-param authentication, as the Gemini REST API expects
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let request = GenerateContentRequest::new(instruction, user_text);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.map_err(GeminiError::Http)?;

            if status == 401 || status == 403 {
                return Err(GeminiError::Auth(body));
            }

            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response.json().await.map_err(GeminiError::Http)?;
        Ok(payload.text())
    }
}

#[async_trait]
impl GeminiClientTrait for GeminiClient {
    async fn generate_code(
        &self,
        prompt: &str,
        language: &str,
    ) -> Result<String, CodeAssistError> {
        let instruction = prompts::generation_instruction(language);
        let user_text = prompts::generation_request(language, prompt);

        let text = self
            .generate_content(&self.flash_model, instruction, &user_text)
            .await
            .map_err(CodeAssistError::Generation)?;

        Ok(text.unwrap_or_else(|| prompts::GENERATION_FAILURE_SENTINEL.to_string()))
    }

    async fn optimize_code(&self, code: &str, language: &str) -> String {
        let instruction = prompts::optimization_instruction(language);

        match self
            .generate_content(&self.pro_model, instruction, code)
            .await
        {
            Ok(Some(text)) => text,
            Ok(None) => {
                log::warn!("Gemini returned no text for optimization, keeping original code");
                code.to_string()
            }
            Err(e) => {
                // Best-effort policy: the original code is always a safe result
                log::error!("Code optimization error: {e}");
                code.to_string()
            }
        }
    }

    async fn explain_code(&self, code: &str, language: &str) -> Result<String, CodeAssistError> {
        let instruction = prompts::explanation_instruction(language);

        let text = self
            .generate_content(&self.flash_model, instruction, code)
            .await
            .map_err(CodeAssistError::Explanation)?;

        Ok(text.unwrap_or_else(|| prompts::EXPLANATION_FALLBACK.to_string()))
    }

    async fn debug_code(
        &self,
        code: &str,
        language: &str,
        error_description: Option<&str>,
    ) -> Result<String, CodeAssistError> {
        let instruction = prompts::debugging_instruction(language, error_description);

        let text = self
            .generate_content(&self.pro_model, instruction, code)
            .await
            .map_err(CodeAssistError::Debug)?;

        Ok(text.unwrap_or_else(|| prompts::DEBUG_FALLBACK.to_string()))
    }
}
