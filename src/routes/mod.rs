// Route exports
pub mod matches;
pub mod profiles;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::Matcher;
use crate::error::MatchError;
use crate::models::ErrorResponse;
use crate::services::{MatchBoard, ProfileStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProfileStore>>,
    pub board: Arc<RwLock<MatchBoard>>,
    pub matcher: Matcher,
    /// Seed for the per-run fallback generator; entropy when unset
    pub fallback_seed: Option<u64>,
    runs_started: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(store: ProfileStore, matcher: Matcher, fallback_seed: Option<u64>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            board: Arc::new(RwLock::new(MatchBoard::new())),
            matcher,
            fallback_seed,
            runs_started: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reserve the sequence number for a new run
    pub fn next_run_sequence(&self) -> u64 {
        self.runs_started.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(profiles::configure),
    );
}

/// JSON extractor config that reports payload errors as validation failures
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = error_response(&MatchError::Validation(format!("Invalid JSON: {}", err)));
    error::InternalError::from_response(err, response).into()
}

/// Query extractor config that reports malformed parameters as validation failures
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

/// Handle query string errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    let response = error_response(&MatchError::Validation(format!("Invalid query: {}", err)));
    error::InternalError::from_response(err, response).into()
}

/// Map an engine error to its HTTP response
pub fn error_response(err: &MatchError) -> HttpResponse {
    let (status, label) = match err {
        MatchError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        MatchError::Configuration(_) => (StatusCode::UNPROCESSABLE_ENTITY, "configuration_error"),
        MatchError::ProfileNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: label.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}
