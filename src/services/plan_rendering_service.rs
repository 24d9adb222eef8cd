use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::PlanResult;
use crate::models::{format_distance, GeneratedPlan, PaceZone, WeeklyPlan};

pub const REPORT_WIDTH: usize = 120;
const DAY_COLUMN: usize = 10;
const MILES_COLUMN: usize = 10;
const TYPE_COLUMN: usize = 30;
const DESCRIPTION_COLUMN: usize = 70;

pub const PACE_KEY: &str =
    "PACE KEY: E=Easy | T=Tempo/Threshold | I=Interval | M=Marathon | WU=Warmup | CD=Cooldown";

static WEEK_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^WEEK (\d+) - Total: ([0-9]+(?:\.[0-9]+)?) miles$").unwrap());

/// Race date as shown in reports and emails, e.g. `April 19, 2026`.
pub fn format_race_date(plan: &GeneratedPlan) -> String {
    plan.inputs.marathon_date.format("%B %-d, %Y").to_string()
}

/// Render the plan as a fixed-width text report.
pub fn render_plan_text(plan: &GeneratedPlan) -> String {
    let rule = "=".repeat(REPORT_WIDTH);
    let mut output: Vec<String> = Vec::new();

    output.push("MARATHON TRAINING PLAN".to_string());
    output.push(format!(
        "Goal Time: {} | Race Date: {} | Duration: {} weeks | Days/Week: {}",
        plan.goal_time,
        format_race_date(plan),
        plan.inputs.training_weeks,
        plan.inputs.days_per_week
    ));
    output.push(format!("VDOT: {} | Training Paces Below", plan.vdot));
    output.push(format!("\n{}\n", rule));

    output.push("TRAINING PACES:".to_string());
    for zone in PaceZone::ALL {
        let heading = format!("{} ({}):", zone, zone.code());
        output.push(format!("  {:<17}{}", heading, plan.paces.zone(zone).label));
    }
    output.push(format!("\n{}\n", rule));

    for week in &plan.weeks {
        render_week(week, &mut output);
    }

    output.push(rule);
    output.push(PACE_KEY.to_string());

    output.join("\n")
}

fn render_week(week: &WeeklyPlan, output: &mut Vec<String>) {
    let divider = "-".repeat(REPORT_WIDTH);

    output.push(format!(
        "WEEK {} - Total: {} miles",
        week.week,
        format_distance(week.total_distance)
    ));
    output.push(divider.clone());
    output.push(row("Day", "Miles", "Workout Type", "Description"));
    output.push(divider);

    for day in &week.days {
        let miles = if day.is_rest() {
            "REST".to_string()
        } else {
            format_distance(day.distance)
        };
        output.push(row(&day.day, &miles, day.workout_type(), day.description()));
    }

    output.push(String::new());
}

fn row(day: &str, miles: &str, workout_type: &str, description: &str) -> String {
    format!(
        "{:<day_w$}{:<miles_w$}{:<type_w$}{:<desc_w$}",
        day,
        miles,
        workout_type,
        description,
        day_w = DAY_COLUMN,
        miles_w = MILES_COLUMN,
        type_w = TYPE_COLUMN,
        desc_w = DESCRIPTION_COLUMN
    )
}

/// Serialize the plan as pretty-printed JSON.
pub fn render_plan_json(plan: &GeneratedPlan) -> PlanResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Read `(week, total miles)` pairs back out of a rendered report.
pub fn parse_week_totals(text: &str) -> Vec<(u32, f64)> {
    text.lines()
        .filter_map(|line| WEEK_HEADER.captures(line.trim_end()))
        .filter_map(|captures| {
            let week = captures.get(1)?.as_str().parse().ok()?;
            let total = captures.get(2)?.as_str().parse().ok()?;
            Some((week, total))
        })
        .collect()
}
