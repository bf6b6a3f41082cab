pub mod client;
pub mod extract;

pub use client::{ChatClient, LlmError, DEFAULT_TEMPERATURE};
pub use extract::extract_json;
