use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::PlanResponse;

/// Inbound payload for the coach endpoint: a question about the current plan.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CoachRequest {
    pub question: String,
    pub plan: PlanResponse,
}

impl CoachRequest {
    pub fn validate(&self) -> Result<(), String> {
        for item in &self.plan.items {
            if let Some(minutes) = item.duration_min {
                if !(1..=120).contains(&minutes) {
                    return Err("durationMin must be between 1 and 120".to_string());
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub answer: String,
    /// Free-form edit suggestions, passed through to the frontend as-is.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub suggested_edits: Vec<Value>,
}

impl CoachResponse {
    /// Placeholder returned when the model reply cannot be coerced.
    pub fn fallback() -> Self {
        Self {
            answer: "I simplified that for you.".to_string(),
            suggested_edits: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanItem;

    #[test]
    fn plan_items_with_out_of_range_duration_are_rejected() {
        let request = CoachRequest {
            question: "Can you make step one shorter?".to_string(),
            plan: PlanResponse {
                summary: "Morning routine.".to_string(),
                items: vec![PlanItem {
                    title: "Shower".to_string(),
                    why: "Wakes you up".to_string(),
                    duration_min: Some(500),
                    difficulty: Some("easy".to_string()),
                }],
                explanations: Vec::new(),
            },
        };
        assert!(request.validate().is_err());
    }
}
