use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Inbound payload for the robotics skill-suggestion endpoint.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillsRequest {
    pub intent: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub devices: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillsResponse {
    /// Suggested skills, passed through to the frontend as-is.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub skills_suggested: Vec<Value>,
}

impl SkillsResponse {
    /// Placeholder returned when the model reply cannot be coerced.
    pub fn fallback() -> Self {
        Self {
            skills_suggested: Vec::new(),
        }
    }
}
