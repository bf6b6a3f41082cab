pub mod coach;
pub mod plan;
pub mod skills;

pub use coach::{CoachRequest, CoachResponse};
pub use plan::{PlanItem, PlanRequest, PlanResponse};
pub use skills::{SkillsRequest, SkillsResponse};
