use thiserror::Error;

pub type Result<T, E = GeminiError> = std::result::Result<T, E>;

/// Transport-level failures from the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini authentication failed: {0}. Please check your API key.")]
    Auth(String),

    #[error("Gemini API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

/// Operation-level failures surfaced to callers of [`crate::GeminiClientTrait`].
///
/// Optimization has no variant here: a failed optimization returns the
/// original code unchanged instead of an error.
#[derive(Debug, Error)]
pub enum CodeAssistError {
    #[error("Failed to generate code: {0}")]
    Generation(#[source] GeminiError),

    #[error("Failed to explain code: {0}")]
    Explanation(#[source] GeminiError),

    #[error("Failed to debug code: {0}")]
    Debug(#[source] GeminiError),
}

impl CodeAssistError {
    /// Stable headline for HTTP error envelopes.
    pub fn headline(&self) -> &'static str {
        match self {
            CodeAssistError::Generation(_) => "Failed to generate code",
            CodeAssistError::Explanation(_) => "Failed to explain code",
            CodeAssistError::Debug(_) => "Failed to debug code",
        }
    }

    /// The underlying API failure.
    pub fn cause(&self) -> &GeminiError {
        match self {
            CodeAssistError::Generation(e)
            | CodeAssistError::Explanation(e)
            | CodeAssistError::Debug(e) => e,
        }
    }
}
