use actix_web::error::JsonPayloadError;
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use gemini_client::CodeAssistError;
use serde::Serialize;
use thiserror::Error;

use crate::dto::FieldError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request data")]
    Validation(Vec<FieldError>),

    #[error("{}", .0.headline())]
    Assist(#[from] CodeAssistError),
}

/// Fold body deserialization failures (malformed JSON, wrong-typed fields)
/// into the same validation envelope the field checks produce.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(vec![FieldError {
        field: "body".to_string(),
        message: err.to_string(),
    }])
    .into()
}

/// JSON error envelope; no internal error type crosses the wire.
#[derive(Serialize)]
struct JsonErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Assist(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(details) => JsonErrorBody {
                error: "Invalid request data".to_string(),
                message: None,
                details: Some(details.clone()),
            },
            AppError::Assist(e) => JsonErrorBody {
                error: e.headline().to_string(),
                message: Some(e.cause().to_string()),
                details: None,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemini_client::GeminiError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::Validation(vec![FieldError {
            field: "prompt".to_string(),
            message: "prompt is required".to_string(),
        }]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_assist_failure_maps_to_internal_server_error() {
        let err = AppError::Assist(CodeAssistError::Explanation(GeminiError::Api {
            status: 503,
            body: "overloaded".to_string(),
        }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to explain code");
    }
}
