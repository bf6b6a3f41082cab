use std::env;

/// Chat completion endpoint used unless `OPENAI_API_URL` overrides it.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const DEFAULT_MODEL_ID: &str = "gpt-4o-mini";

/// Process-wide configuration, read once at startup and passed explicitly
/// into the state and client. Handlers never read the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the upstream API. Absence is only fatal when a
    /// generation endpoint is actually hit.
    pub openai_api_key: Option<String>,
    pub model_id: String,
    /// Allowed CORS origin; `*` means permissive.
    pub frontend_origin: String,
    pub port: u16,
    pub api_url: String,
}

impl Config {
    pub fn from_env(default_port: u16) -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            model_id: env::var("CAS_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            frontend_origin: env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            api_url: env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
