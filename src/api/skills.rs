use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::infrastructure::AppState;
use crate::llm::extract_json;
use crate::models::{SkillsRequest, SkillsResponse};

#[utoipa::path(
    post,
    path = "/api/robotics/skills",
    request_body = SkillsRequest,
    responses(
        (status = 200, description = "Safe assistive skills for the intent", body = SkillsResponse),
        (status = 500, description = "Service misconfigured")
    )
)]
pub async fn suggest_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsRequest>,
) -> Response {
    let text = match state.chat().chat(&skills_prompt(&req)).await {
        Ok(text) => text,
        Err(err) => return err.into_response(),
    };

    let reply = match extract_json(&text).and_then(serde_json::from_value::<SkillsResponse>) {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!("Skills reply was not usable JSON ({}), returning placeholder", err);
            SkillsResponse::fallback()
        }
    };

    Json(reply).into_response()
}

fn skills_prompt(req: &SkillsRequest) -> String {
    format!(
        r#"You are A11y-Robotics-Model. Map user intent + environment to safe assistive robot skills.
Constraints: human-in-the-loop, voice confirmation before motion, low-cost devices.
Input:
- Intent: {intent}
- Room: {room}
- Devices: {devices}

Output JSON:
{{
  "skillsSuggested": [
    {{
      "name": "Guided Pick-and-Place",
      "steps": "1) highlight item 2) voice confirm 3) route 4) place",
      "safety": "voice confirm before motion"
    }},
    {{
      "name": "Reminder + Navigation Cue",
      "steps": "1) audio cue 2) visual arrow 3) vibration prompt",
      "safety": "no autonomous motion if path unclear"
    }}
  ]
}}
Return JSON only."#,
        intent = req.intent,
        room = req.room_type,
        devices = req.devices,
    )
}
