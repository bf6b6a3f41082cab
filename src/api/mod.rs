pub mod coach;
pub mod health;
pub mod plan;
pub mod skills;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

/// Router for the planning + coaching service.
pub fn cas_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/cas/plan", post(plan::build_plan))
        .route("/cas/coach", post(coach::coach))
        .with_state(state)
}

/// Router for the assistive-robotics skill service.
pub fn robotics_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/robotics/skills", post(skills::suggest_skills))
        .with_state(state)
}
