use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{PlanError, PlanResult};

/// Sender details and limits for plan emails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_from_email")]
    pub from_email: String,

    #[serde(default = "default_from_name")]
    pub from_name: String,

    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default = "default_send_timeout")]
    pub send_timeout_seconds: u64,
}

fn default_from_email() -> String {
    "noreply@marathontrainingplans.com".to_string()
}

fn default_from_name() -> String {
    "Marathon Training Plans".to_string()
}

fn default_site_url() -> String {
    "https://www.marathontrainingplans.com".to_string()
}

fn default_send_timeout() -> u64 {
    30
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            from_email: default_from_email(),
            from_name: default_from_name(),
            site_url: default_site_url(),
            send_timeout_seconds: default_send_timeout(),
        }
    }
}

impl DeliveryConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> PlanResult<Self> {
        let send_timeout_seconds = match env::var("PLAN_MAIL_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse().map_err(|_| {
                PlanError::Config(format!("PLAN_MAIL_TIMEOUT_SECONDS is not a number: {}", raw))
            })?,
            Err(_) => default_send_timeout(),
        };

        Ok(Self {
            from_email: env::var("PLAN_MAIL_FROM_EMAIL").unwrap_or_else(|_| default_from_email()),
            from_name: env::var("PLAN_MAIL_FROM_NAME").unwrap_or_else(|_| default_from_name()),
            site_url: env::var("PLAN_SITE_URL").unwrap_or_else(|_| default_site_url()),
            send_timeout_seconds,
        })
    }

    /// `Name <address>` form used in the From header.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}
