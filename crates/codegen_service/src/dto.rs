//! Request/response DTOs and the shared field-level validation.
//!
//! Every mutating endpoint runs the same validation: required fields must be
//! present and non-empty, and failures come back as a list of `FieldError`s
//! rather than a single flat message.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn require(field: &str, value: Option<String>, errors: &mut Vec<FieldError>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("{field} is required"),
            });
            String::new()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateCodeRequest {
    pub prompt: Option<String>,
    pub language: Option<String>,
}

impl GenerateCodeRequest {
    pub fn validate(self) -> Result<(String, String), Vec<FieldError>> {
        let mut errors = Vec::new();
        let prompt = require("prompt", self.prompt, &mut errors);
        let language = require("language", self.language, &mut errors);
        if errors.is_empty() {
            Ok((prompt, language))
        } else {
            Err(errors)
        }
    }
}

/// Shared body for the optimize/explain/debug endpoints; only debug reads
/// `errorDescription`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionRequest {
    pub code: Option<String>,
    pub language: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug)]
pub struct CodeAction {
    pub code: String,
    pub language: String,
    pub error_description: Option<String>,
}

impl CodeActionRequest {
    pub fn validate(self) -> Result<CodeAction, Vec<FieldError>> {
        let mut errors = Vec::new();
        let code = require("code", self.code, &mut errors);
        let language = require("language", self.language, &mut errors);
        if errors.is_empty() {
            Ok(CodeAction {
                code,
                language,
                error_description: self.error_description,
            })
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeResponse {
    pub id: Uuid,
    pub generated_code: String,
    pub language: String,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeCodeResponse {
    pub optimized_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainCodeResponse {
    pub explanation: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugCodeResponse {
    pub debug_result: String,
}
