use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt::Display;

use crate::infrastructure::AppState;
use crate::llm::extract_json;
use crate::models::{PlanRequest, PlanResponse};

#[utoipa::path(
    post,
    path = "/api/cas/plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Tiny-step daily plan", body = PlanResponse),
        (status = 422, description = "Request failed boundary validation"),
        (status = 500, description = "Service misconfigured")
    )
)]
pub async fn build_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Response {
    if let Err(reason) = req.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": reason })),
        )
            .into_response();
    }

    let text = match state.chat().chat(&plan_prompt(&req)).await {
        Ok(text) => text,
        Err(err) => return err.into_response(),
    };

    let plan = match extract_json(&text).and_then(serde_json::from_value::<PlanResponse>) {
        Ok(plan) => plan,
        Err(err) => {
            tracing::warn!("Plan reply was not usable JSON ({}), returning placeholder", err);
            PlanResponse::fallback()
        }
    };

    Json(plan).into_response()
}

fn plan_prompt(req: &PlanRequest) -> String {
    format!(
        r#"You are CAS-Model for users with high cognitive and accessibility needs.
Input:
- Goal: {goal}
- Friction: {friction}
- Strengths: {strengths}
- Sleep: {sleep}h, Mood: {mood}/5, Focus: {focus}/5

Output JSON:
{{
  "summary":"one-sentence plain-language summary",
  "items":[
    {{"title":"short action","why":"simple reason","durationMin":5,"difficulty":"easy"}},
    {{"title":"short action","why":"simple reason","durationMin":5,"difficulty":"easy"}}
  ],
  "explanations":["1-sentence rationale for plan"]
}}
Return JSON only."#,
        goal = req.goal,
        friction = req.friction,
        strengths = req.strengths,
        sleep = fmt_opt(&req.sleep_hours),
        mood = fmt_opt(&req.mood),
        focus = fmt_opt(&req.focus),
    )
}

/// Renders absent optional inputs as "-" so the template stays readable.
pub(crate) fn fmt_opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_all_inputs_and_shape_instruction() {
        let req = PlanRequest {
            goal: "pack a school bag".to_string(),
            friction: "loses track of items".to_string(),
            strengths: "good with checklists".to_string(),
            sleep_hours: Some(7.5),
            mood: Some(3),
            focus: None,
        };
        let prompt = plan_prompt(&req);
        assert!(prompt.contains("- Goal: pack a school bag"));
        assert!(prompt.contains("- Friction: loses track of items"));
        assert!(prompt.contains("Sleep: 7.5h, Mood: 3/5, Focus: -/5"));
        assert!(prompt.ends_with("Return JSON only."));
    }
}
