use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound payload for the plan endpoint. Field names follow the frontend's
/// camelCase convention.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub goal: String,
    #[serde(default)]
    pub friction: String,
    #[serde(default)]
    pub strengths: String,
    pub sleep_hours: Option<f64>,
    /// 1 (low) to 5 (high)
    pub mood: Option<u8>,
    /// 1 (low) to 5 (high)
    pub focus: Option<u8>,
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(mood) = self.mood {
            if !(1..=5).contains(&mood) {
                return Err("mood must be between 1 and 5".to_string());
            }
        }
        if let Some(focus) = self.focus {
            if !(1..=5).contains(&focus) {
                return Err("focus must be between 1 and 5".to_string());
            }
        }
        Ok(())
    }
}

/// One tiny step in a plan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub title: String,
    pub why: String,
    /// 1 to 120 minutes; 5 when the model leaves it out.
    #[serde(default = "default_duration_min")]
    pub duration_min: Option<u32>,
    #[serde(default = "default_difficulty")]
    pub difficulty: Option<String>,
}

fn default_duration_min() -> Option<u32> {
    Some(5)
}

fn default_difficulty() -> Option<String> {
    Some("easy".to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanResponse {
    pub summary: String,
    #[serde(default)]
    pub items: Vec<PlanItem>,
    #[serde(default)]
    pub explanations: Vec<String>,
}

impl PlanResponse {
    /// Placeholder returned when the model reply cannot be coerced into a
    /// plan. An empty item list is a valid, expected degraded result.
    pub fn fallback() -> Self {
        Self {
            summary: "Plan ready.".to_string(),
            items: Vec::new(),
            explanations: Vec::new(),
        }
    }
}
