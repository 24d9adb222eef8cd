use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::goal_time::{GoalTime, GoalTimeError};
use super::plan::PlanInputs;

pub const TRAINING_WEEKS_RANGE: std::ops::RangeInclusive<u32> = 8..=20;
pub const CURRENT_WEEKLY_MILES_RANGE: std::ops::RangeInclusive<u32> = 10..=80;
pub const PEAK_WEEKLY_MILES_RANGE: std::ops::RangeInclusive<u32> = 20..=100;
pub const DAYS_PER_WEEK_RANGE: std::ops::RangeInclusive<u32> = 3..=7;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Marathon date must be in the future")]
    MarathonDateNotInFuture,
    #[error("Training weeks must be between 8 and 20")]
    TrainingWeeksOutOfRange,
    #[error("Current weekly miles must be between 10 and 80")]
    CurrentMilesOutOfRange,
    #[error("Max weekly miles must be between 20 and 100")]
    PeakMilesOutOfRange,
    #[error("Max weekly miles must be greater than current weekly miles")]
    PeakNotAboveCurrent,
    #[error("Days per week must be between 3 and 7")]
    DaysPerWeekOutOfRange,
    #[error("{0}")]
    GoalTime(#[from] GoalTimeError),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Every problem found in a request, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Unvalidated plan request as collected from a form or the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub marathon_date: NaiveDate,
    pub training_weeks: u32,
    pub current_weekly_miles: u32,
    pub peak_weekly_miles: u32,
    pub days_per_week: u32,
    pub goal_time: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

impl PlanRequest {
    /// Check every field against the accepted ranges.
    ///
    /// `today` is passed in so the check is deterministic.
    pub fn validate(&self, today: NaiveDate) -> Result<PlanInputs, ValidationErrors> {
        let mut errors = Vec::new();

        if self.marathon_date <= today {
            errors.push(ValidationError::MarathonDateNotInFuture);
        }

        if !TRAINING_WEEKS_RANGE.contains(&self.training_weeks) {
            errors.push(ValidationError::TrainingWeeksOutOfRange);
        }

        if !CURRENT_WEEKLY_MILES_RANGE.contains(&self.current_weekly_miles) {
            errors.push(ValidationError::CurrentMilesOutOfRange);
        }

        if self.peak_weekly_miles <= self.current_weekly_miles {
            errors.push(ValidationError::PeakNotAboveCurrent);
        } else if !PEAK_WEEKLY_MILES_RANGE.contains(&self.peak_weekly_miles) {
            errors.push(ValidationError::PeakMilesOutOfRange);
        }

        if !DAYS_PER_WEEK_RANGE.contains(&self.days_per_week) {
            errors.push(ValidationError::DaysPerWeekOutOfRange);
        }

        let goal_time = match self.goal_time.parse::<GoalTime>() {
            Ok(goal_time) => Some(goal_time),
            Err(e) => {
                errors.push(e.into());
                None
            }
        };

        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            if let Err(e) = validate_email(email) {
                errors.push(e);
            }
        }

        match goal_time {
            Some(goal_time) if errors.is_empty() => Ok(PlanInputs {
                marathon_date: self.marathon_date,
                training_weeks: self.training_weeks,
                current_weekly_miles: self.current_weekly_miles,
                peak_weekly_miles: self.peak_weekly_miles,
                days_per_week: self.days_per_week,
                goal_time,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

/// Email validation
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.len() > 255 || !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
