use crate::error::{AppError, AppResult};
use axum::routing::get;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;

/// Create application router
pub fn create_router(allowed_origins: Vec<String>) -> AppResult<axum::Router> {
    // Configure CORS with specific origins. Credentialed responses may not use
    // the wildcard, so methods and headers mirror whatever the request asks for.
    let origins = allowed_origins
        .iter()
        .map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|_| AppError::Configuration(format!("Invalid CORS origin: {}", s)))
        })
        .collect::<AppResult<Vec<_>>>()?;
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let router = axum::Router::new()
        .route("/", get(handlers::root))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
