//! Chinese name generator backend
//!
//! Accepts a person's name and optional self-description over HTTP and
//! returns candidate Chinese names produced by a chat-completion provider.

use std::path::Path;
use std::sync::Arc;

use axum::{Router, routing::get, routing::post};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

rust_i18n::i18n!("locales", fallback = "en");

use crate::config::StaticConfig;
use crate::services::NameGenerationService;

/// Shared state handed to every handler
pub struct AppState {
    pub naming_service: Arc<dyn NameGenerationService>,
}

impl AppState {
    pub fn new(naming_service: Arc<dyn NameGenerationService>) -> Self {
        Self { naming_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::naming::generate_names, handlers::health::health),
    components(schemas(
        models::GeneratedName,
        models::NamingRequest,
        utils::error::ApiErrorResponse
    )),
    tags(
        (name = "Naming", description = "Chinese name generation"),
        (name = "System", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Build the HTTP application
pub fn build_router(state: Arc<AppState>, static_config: &StaticConfig) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let api = Router::new()
        .route("/api/generate", post(handlers::naming::generate_names))
        .route("/api/health", get(handlers::health::health))
        .layer(axum::middleware::from_fn(middleware::locale_middleware))
        .with_state(state);

    let mut app = Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if static_config.enabled {
        if Path::new(&static_config.web_root).is_dir() {
            tracing::info!("Serving static files from {}", static_config.web_root);
            app = app.fallback_service(ServeDir::new(&static_config.web_root));
        } else {
            tracing::warn!(
                "Static file serving enabled but {} is not a directory",
                static_config.web_root
            );
        }
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
