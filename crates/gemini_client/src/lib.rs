pub mod client;
pub mod client_trait;
pub mod error;
pub mod models;
pub mod prompts;

pub use client::GeminiClient;
pub use client_trait::GeminiClientTrait;
pub use error::{CodeAssistError, GeminiError};
