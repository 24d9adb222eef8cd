use thiserror::Error;

use crate::models::ValidationErrors;
use crate::services::email_notification_service::EmailError;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid plan request: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Email delivery failed: {0}")]
    Email(#[from] EmailError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type PlanResult<T> = Result<T, PlanError>;
