use std::sync::Arc;
use std::time::Instant;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use gemini_client::{GeminiClient, GeminiClientTrait};
use log::{error, info, warn};

use crate::controllers::{codegen_controller, system_controller};
use crate::error::json_error_handler;
use crate::storage::{GenerationStoreProvider, MemoryStorageProvider};

const DEFAULT_WORKER_COUNT: usize = 10;

/// Shared handler state. Both collaborators are injected behind traits so
/// tests can substitute fakes per test case.
pub struct AppState {
    pub gemini: Arc<dyn GeminiClientTrait>,
    pub store: Arc<dyn GenerationStoreProvider>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        gemini: Arc<dyn GeminiClientTrait>,
        store: Arc<dyn GenerationStoreProvider>,
    ) -> Self {
        Self {
            gemini,
            store,
            started_at: Instant::now(),
        }
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
        web::scope("/api")
            .configure(codegen_controller::config)
            .configure(system_controller::config),
    );
}

pub async fn run(port: u16) -> Result<(), String> {
    info!("Starting code assist service...");

    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; generation requests will fail");
    }

    let gemini: Arc<dyn GeminiClientTrait> = Arc::new(GeminiClient::new(api_key));
    let store: Arc<dyn GenerationStoreProvider> = Arc::new(MemoryStorageProvider::new());
    let app_state = web::Data::new(AppState::new(gemini, store));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Code assist service listening on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
