pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use config::DeliveryConfig;
pub use errors::{PlanError, PlanResult};
pub use models::{GeneratedPlan, GoalTime, PlanInputs, PlanRequest, PlanSummary};
pub use services::{generate_plan, render_plan_json, render_plan_text, PlanGenerationService};
