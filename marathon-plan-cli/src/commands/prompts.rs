use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use marathon_plan::models::{
    validate_email, GoalTime, PlanRequest, CURRENT_WEEKLY_MILES_RANGE, DAYS_PER_WEEK_RANGE,
    PEAK_WEEKLY_MILES_RANGE, TRAINING_WEEKS_RANGE,
};
use std::ops::RangeInclusive;

use crate::config::PlanDefaults;

/// Ask for every plan field, starting from `defaults`.
pub fn collect_request(
    defaults: &PlanDefaults,
    race_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<PlanRequest> {
    println!("Create a Marathon Training Plan");
    println!();

    let mut date_prompt = Input::<String>::new().with_prompt("Marathon date (YYYY-MM-DD)");
    if let Some(date) = race_date {
        date_prompt = date_prompt.default(date.to_string());
    }
    let marathon_date: NaiveDate = date_prompt
        .validate_with(|input: &String| -> Result<(), String> {
            match input.parse::<NaiveDate>() {
                Ok(date) if date > today => Ok(()),
                Ok(_) => Err("Marathon date must be in the future".to_string()),
                Err(_) => Err("Use the YYYY-MM-DD format".to_string()),
            }
        })
        .interact_text()?
        .parse()?;

    let training_weeks = ranged("Training weeks", defaults.training_weeks, TRAINING_WEEKS_RANGE)?;
    let current_weekly_miles = ranged(
        "Current weekly miles",
        defaults.current_weekly_miles,
        CURRENT_WEEKLY_MILES_RANGE,
    )?;

    let peak_weekly_miles: u32 = Input::new()
        .with_prompt("Peak weekly miles")
        .default(defaults.peak_weekly_miles.max(current_weekly_miles + 1))
        .validate_with(|input: &u32| -> Result<(), String> {
            if *input <= current_weekly_miles {
                Err("Max weekly miles must be greater than current weekly miles".to_string())
            } else if !PEAK_WEEKLY_MILES_RANGE.contains(input) {
                Err("Max weekly miles must be between 20 and 100".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let days_per_week =
        ranged("Running days per week", defaults.days_per_week, DAYS_PER_WEEK_RANGE)?;

    let goal_time: String = Input::new()
        .with_prompt("Goal time (H:MM:SS)")
        .default(defaults.goal_time.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            input.parse::<GoalTime>().map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let email: String = Input::new()
        .with_prompt("Email the plan to (optional)")
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.is_empty() {
                return Ok(());
            }
            validate_email(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let first_name: String = Input::new()
        .with_prompt("First name (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(PlanRequest {
        marathon_date,
        training_weeks,
        current_weekly_miles,
        peak_weekly_miles,
        days_per_week,
        goal_time,
        email: Some(email).filter(|e| !e.is_empty()),
        first_name: Some(first_name).filter(|n| !n.is_empty()),
    })
}

fn ranged(prompt: &str, default: u32, range: RangeInclusive<u32>) -> Result<u32> {
    let value = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, range.start(), range.end()))
        .default(default.clamp(*range.start(), *range.end()))
        .validate_with(|input: &u32| -> Result<(), String> {
            if range.contains(input) {
                Ok(())
            } else {
                Err(format!("Enter a value between {} and {}", range.start(), range.end()))
            }
        })
        .interact_text()?;

    Ok(value)
}
