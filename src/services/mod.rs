// Plan generation services

pub mod daily_distribution_service;
pub mod email_notification_service;
pub mod mileage_progression_service;
pub mod plan_generation_service;
pub mod plan_rendering_service;
pub mod vdot_service;
pub mod workout_synthesis_service;

pub use daily_distribution_service::distribute_week;
pub use email_notification_service::{
    DeliveryStatus, EmailError, LogMailer, PlanDeliveryOutcome, PlanDeliveryService, PlanEmail,
    PlanMailer,
};
pub use mileage_progression_service::{training_phase, weekly_target_distance, TrainingPhase};
pub use plan_generation_service::{generate_plan, PlanGenerationService};
pub use plan_rendering_service::{parse_week_totals, render_plan_json, render_plan_text};
pub use vdot_service::{compute_fitness_and_paces, fitness_score, training_paces};
pub use workout_synthesis_service::{assign_role, build_workout};
