use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use colored::Colorize;
use marathon_plan::models::{format_distance, PlanRequest, PlanSummary};
use marathon_plan::services::{render_plan_json, LogMailer, PlanDeliveryService};
use marathon_plan::PlanError;
use std::fs;
use std::path::{Path, PathBuf};

use super::prompts;
use crate::config::{Config, OutputFormat, PlanDefaults};

#[derive(Args)]
pub struct GenerateCommand {
    /// Race date (YYYY-MM-DD)
    #[arg(long)]
    race_date: Option<NaiveDate>,

    /// Number of training weeks, race week included
    #[arg(short, long)]
    weeks: Option<u32>,

    /// Current weekly mileage
    #[arg(long)]
    current: Option<u32>,

    /// Peak weekly mileage
    #[arg(long)]
    peak: Option<u32>,

    /// Running days per week
    #[arg(short, long)]
    days: Option<u32>,

    /// Goal marathon time (H:MM:SS)
    #[arg(short, long)]
    goal: Option<String>,

    /// Compose the plan email for this address (delivery is only logged)
    #[arg(long)]
    email: Option<String>,

    /// First name used in the email greeting
    #[arg(long)]
    name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the plan to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Prompt for each value
    #[arg(short, long)]
    interactive: bool,

    /// Skip the summary after the plan
    #[arg(long)]
    no_summary: bool,
}

impl GenerateCommand {
    pub async fn execute(self, config_path: Option<&Path>) -> Result<()> {
        let config = Config::load(config_path)?;
        let today = Local::now().date_naive();

        let request = if self.interactive {
            prompts::collect_request(&self.plan_defaults(&config.plan), self.race_date, today)?
        } else {
            self.request_from_flags(&config.plan)?
        };

        let service = PlanDeliveryService::new(LogMailer, config.delivery.clone());
        let outcome = match service.generate_and_deliver(&request, today).await {
            Ok(outcome) => outcome,
            Err(PlanError::Validation(errors)) => {
                eprintln!("{}", "Please fix the following:".red().bold());
                for error in &errors.0 {
                    eprintln!("  - {}", error);
                }
                bail!("Invalid plan request");
            }
            Err(e) => return Err(e.into()),
        };

        let rendered = match self.format.unwrap_or(config.output.format) {
            OutputFormat::Text => outcome.plan_text.clone(),
            OutputFormat::Json => render_plan_json(&outcome.plan)?,
        };

        match &self.output {
            Some(path) => {
                fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write plan to {}", path.display()))?;
                eprintln!("{} Plan written to {}", "✓".green(), path.display());
            }
            None => println!("{}", rendered),
        }

        if config.output.show_summary && !self.no_summary {
            print_summary(&outcome.plan.summary());
        }

        eprintln!("{}", outcome.message);

        Ok(())
    }

    /// Config defaults with any flags given on the command line applied on top.
    fn plan_defaults(&self, defaults: &PlanDefaults) -> PlanDefaults {
        PlanDefaults {
            training_weeks: self.weeks.unwrap_or(defaults.training_weeks),
            current_weekly_miles: self.current.unwrap_or(defaults.current_weekly_miles),
            peak_weekly_miles: self.peak.unwrap_or(defaults.peak_weekly_miles),
            days_per_week: self.days.unwrap_or(defaults.days_per_week),
            goal_time: self.goal.clone().unwrap_or_else(|| defaults.goal_time.clone()),
        }
    }

    fn request_from_flags(&self, defaults: &PlanDefaults) -> Result<PlanRequest> {
        let marathon_date = self
            .race_date
            .context("--race-date is required unless --interactive is used")?;
        let plan = self.plan_defaults(defaults);

        Ok(PlanRequest {
            marathon_date,
            training_weeks: plan.training_weeks,
            current_weekly_miles: plan.current_weekly_miles,
            peak_weekly_miles: plan.peak_weekly_miles,
            days_per_week: plan.days_per_week,
            goal_time: plan.goal_time,
            email: self.email.clone(),
            first_name: self.name.clone(),
        })
    }
}

fn print_summary(summary: &PlanSummary) {
    eprintln!();
    eprintln!("{}", "Plan Summary".bold());
    eprintln!("  Total distance:     {} miles", format_distance(summary.total_distance));
    eprintln!(
        "  Peak week:          week {} ({} miles)",
        summary.peak_week,
        format_distance(summary.peak_week_distance)
    );
    eprintln!("  Longest run:        {} miles", format_distance(summary.longest_training_run));
    eprintln!("  Quality sessions:   {}", summary.quality_sessions);
    eprintln!("  Rest days:          {}", summary.rest_days);
    eprintln!();
}
