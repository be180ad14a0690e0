//! Code-assist endpoints: generation, optimization, explanation, debugging,
//! and recency-ordered retrieval of stored generations.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::dto::{
    CodeActionRequest, DebugCodeResponse, ExplainCodeResponse, GenerateCodeRequest,
    GenerateCodeResponse, OptimizeCodeResponse,
};
use crate::error::{AppError, Result};
use crate::server::AppState;

const DEFAULT_RECENT_LIMIT: i64 = 10;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_code)
        .service(optimize_code)
        .service(explain_code)
        .service(debug_code)
        .service(recent_generations);
}

/// Generate code and persist the result. The only endpoint that writes to
/// the store, and it writes only after the model call succeeds.
#[post("/generate-code")]
pub async fn generate_code(
    request: web::Json<GenerateCodeRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (prompt, language) = request
        .into_inner()
        .validate()
        .map_err(AppError::Validation)?;

    let generated_code = state
        .gemini
        .generate_code(&prompt, &language)
        .await
        .map_err(|e| {
            log::error!("Code generation error: {e}");
            AppError::from(e)
        })?;

    let record = state.store.create(prompt, language, generated_code).await;

    Ok(HttpResponse::Ok().json(GenerateCodeResponse {
        id: record.id,
        generated_code: record.generated_code,
        language: record.language,
        prompt: record.prompt,
    }))
}

/// Best-effort optimization: the client returns the original code on any
/// model failure, so this endpoint only fails on invalid input.
#[post("/optimize-code")]
pub async fn optimize_code(
    request: web::Json<CodeActionRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let action = request
        .into_inner()
        .validate()
        .map_err(AppError::Validation)?;

    let optimized_code = state.gemini.optimize_code(&action.code, &action.language).await;

    Ok(HttpResponse::Ok().json(OptimizeCodeResponse { optimized_code }))
}

#[post("/explain-code")]
pub async fn explain_code(
    request: web::Json<CodeActionRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let action = request
        .into_inner()
        .validate()
        .map_err(AppError::Validation)?;

    let explanation = state
        .gemini
        .explain_code(&action.code, &action.language)
        .await
        .map_err(|e| {
            log::error!("Code explanation error: {e}");
            AppError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(ExplainCodeResponse { explanation }))
}

#[post("/debug-code")]
pub async fn debug_code(
    request: web::Json<CodeActionRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let action = request
        .into_inner()
        .validate()
        .map_err(AppError::Validation)?;

    let debug_result = state
        .gemini
        .debug_code(
            &action.code,
            &action.language,
            action.error_description.as_deref(),
        )
        .await
        .map_err(|e| {
            log::error!("Code debugging error: {e}");
            AppError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(DebugCodeResponse { debug_result }))
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    limit: Option<String>,
}

#[get("/recent-generations")]
pub async fn recent_generations(
    query: web::Query<RecentQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    // Non-numeric input falls back to the default
    let limit = query
        .limit
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(DEFAULT_RECENT_LIMIT);

    let generations = state.store.list_recent(limit).await;
    HttpResponse::Ok().json(generations)
}
