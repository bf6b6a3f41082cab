// Server module - HTTP plumbing shared by both service binaries

use axum::http::HeaderValue;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;

/// Assemble the full application: Swagger UI, the service's API router
/// nested under /api, CORS and request tracing.
pub fn build_router(
    api_router: Router,
    openapi: utoipa::openapi::OpenApi,
    config: &Config,
) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", openapi))
        .nest("/api", api_router)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Permissive by default; a configured FRONTEND_ORIGIN restricts CORS to
/// that single origin.
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.frontend_origin == "*" {
        return cors.allow_origin(Any);
    }

    match config.frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::error!(
                "Failed to parse CORS origin '{}': {}, falling back to permissive",
                config.frontend_origin,
                e
            );
            cors.allow_origin(Any)
        }
    }
}

/// Bind the port and run the server until the process is stopped.
pub async fn serve(app: Router, port: u16) -> Result<(), String> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}
