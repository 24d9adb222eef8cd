use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use marathon_plan::models::{marathon_time_from_pace, GoalTime};
use marathon_plan::services::compute_fitness_and_paces;

#[derive(Args)]
pub struct PacesCommand {
    /// Goal marathon time (H:MM:SS)
    goal: String,
}

impl PacesCommand {
    pub fn execute(self) -> Result<()> {
        let goal: GoalTime = self
            .goal
            .parse()
            .with_context(|| format!("Invalid goal time '{}'", self.goal))?;
        let (vdot, paces) = compute_fitness_and_paces(&goal);

        println!("{}", format!("Training paces for a {} marathon", goal).bold());
        println!("VDOT: {}", vdot);
        println!();

        for pace in paces.iter() {
            let heading = format!("{} ({}):", pace.zone, pace.zone.code());
            println!("  {:<17}{}", heading, pace.label);
        }

        println!();
        println!(
            "Holding the fast end of marathon pace finishes in {}",
            marathon_time_from_pace(paces.marathon.fastest())
        );

        Ok(())
    }
}
