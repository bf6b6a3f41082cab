use crate::api;
use crate::models;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::plan::build_plan,
        api::coach::coach,
    ),
    components(
        schemas(
            models::PlanRequest,
            models::PlanItem,
            models::PlanResponse,
            models::CoachRequest,
            models::CoachResponse,
        )
    ),
    tags(
        (name = "cas-model", description = "Planning and coaching API")
    )
)]
pub struct CasApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::skills::suggest_skills,
    ),
    components(
        schemas(
            models::SkillsRequest,
            models::SkillsResponse,
        )
    ),
    tags(
        (name = "robotics-model", description = "Assistive robotics skill API")
    )
)]
pub struct RoboticsApiDoc;
