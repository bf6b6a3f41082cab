pub mod api;
pub mod api_docs;
pub mod config;
pub mod infrastructure;
pub mod llm;
pub mod models;

pub use config::Config;
pub use infrastructure::AppState;
