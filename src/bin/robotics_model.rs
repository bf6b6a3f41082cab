use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use cas_models::api_docs::RoboticsApiDoc;
use cas_models::infrastructure::server;
use cas_models::{api, AppState, Config};

const DEFAULT_PORT: u16 = 8788;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cas_models=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env(DEFAULT_PORT);

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; generation endpoints will return errors");
    }

    let state = AppState::new(config.clone(), "robotics");
    let app = server::build_router(api::robotics_router(state), RoboticsApiDoc::openapi(), &config);

    tracing::info!(
        "A11y-Robotics-Model service starting (model: {})",
        config.model_id
    );

    if let Err(e) = server::serve(app, config.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
