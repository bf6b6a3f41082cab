use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::infrastructure::AppState;
use crate::llm::extract_json;
use crate::models::{CoachRequest, CoachResponse};

/// Plan JSON embedded in the prompt is capped at this many characters.
const PLAN_CONTEXT_LIMIT: usize = 4000;

#[utoipa::path(
    post,
    path = "/api/cas/coach",
    request_body = CoachRequest,
    responses(
        (status = 200, description = "Answer with suggested plan edits", body = CoachResponse),
        (status = 422, description = "Request failed boundary validation"),
        (status = 500, description = "Service misconfigured")
    )
)]
pub async fn coach(State(state): State<AppState>, Json(req): Json<CoachRequest>) -> Response {
    if let Err(reason) = req.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": reason })),
        )
            .into_response();
    }

    let text = match state.chat().chat(&coach_prompt(&req)).await {
        Ok(text) => text,
        Err(err) => return err.into_response(),
    };

    let reply = match extract_json(&text).and_then(serde_json::from_value::<CoachResponse>) {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!("Coach reply was not usable JSON ({}), returning placeholder", err);
            CoachResponse::fallback()
        }
    };

    Json(reply).into_response()
}

fn coach_prompt(req: &CoachRequest) -> String {
    let plan_json =
        serde_json::to_string(&req.plan).unwrap_or_else(|_| "{}".to_string());
    let safe_plan: String = plan_json.chars().take(PLAN_CONTEXT_LIMIT).collect();

    format!(
        r#"You are CAS-Model Coach. Be brief, kind, concrete. Reading level grade 6-8.
Question: {question}
Current plan JSON: {safe_plan}

Answer with JSON:
{{"answer":"plain-language answer","suggestedEdits":[{{"index":0,"newTitle":"","newWhy":""}}]}}"#,
        question = req.question,
        safe_plan = safe_plan,
    )
}
