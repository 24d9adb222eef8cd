use crate::models::{
    round_to_tenth, DailyWorkout, GeneratedPlan, PlanInputs, RunningDayPattern, WeeklyPlan,
    DAY_NAMES,
};

use super::daily_distribution_service::distribute_week;
use super::mileage_progression_service::weekly_target_distance;
use super::vdot_service::compute_fitness_and_paces;
use super::workout_synthesis_service::{assign_role, build_workout};

/// Builds complete marathon plans from validated inputs.
///
/// Stateless: a single instance can serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerationService;

impl PlanGenerationService {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_plan(&self, inputs: &PlanInputs) -> GeneratedPlan {
        let (vdot, paces) = compute_fitness_and_paces(&inputs.goal_time);
        let pattern = RunningDayPattern::for_days_per_week(inputs.days_per_week);

        let weeks: Vec<WeeklyPlan> = (1..=inputs.training_weeks)
            .map(|week| self.generate_week(inputs, week, &pattern))
            .collect();

        tracing::info!(
            "Generated {}-week plan for goal {} (VDOT {})",
            inputs.training_weeks,
            inputs.goal_time,
            vdot
        );

        GeneratedPlan {
            vdot,
            paces,
            goal_time: inputs.goal_time,
            inputs: inputs.clone(),
            weeks,
        }
    }

    pub fn generate_week(
        &self,
        inputs: &PlanInputs,
        week: u32,
        pattern: &RunningDayPattern,
    ) -> WeeklyPlan {
        let target_distance = weekly_target_distance(
            week,
            inputs.training_weeks,
            inputs.current_weekly_miles,
            inputs.peak_weekly_miles,
        );
        let daily_miles = distribute_week(target_distance, week, inputs.training_weeks, pattern);

        let days: Vec<DailyWorkout> = daily_miles
            .iter()
            .zip(DAY_NAMES.iter())
            .enumerate()
            .map(|(day_index, (&distance, day))| {
                let role = assign_role(distance, week, inputs.training_weeks, day_index, pattern);
                DailyWorkout {
                    day: day.to_string(),
                    distance,
                    workout: build_workout(role, distance),
                }
            })
            .collect();

        let total_distance = round_to_tenth(daily_miles.iter().sum());

        tracing::debug!(
            "Week {}: target {} miles, scheduled {} miles",
            week,
            target_distance,
            total_distance
        );

        WeeklyPlan {
            week,
            target_distance,
            total_distance,
            days,
        }
    }
}

/// Generate a plan with the default service.
pub fn generate_plan(inputs: &PlanInputs) -> GeneratedPlan {
    PlanGenerationService::new().generate_plan(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutRole;
    use chrono::NaiveDate;

    fn inputs() -> PlanInputs {
        PlanInputs {
            marathon_date: NaiveDate::from_ymd_opt(2026, 4, 19).unwrap(),
            training_weeks: 12,
            current_weekly_miles: 30,
            peak_weekly_miles: 50,
            days_per_week: 5,
            goal_time: "4:00:00".parse().unwrap(),
        }
    }

    #[test]
    fn test_generates_every_week_and_day() {
        let plan = generate_plan(&inputs());
        assert_eq!(plan.weeks.len(), 12);
        for (idx, week) in plan.weeks.iter().enumerate() {
            assert_eq!(week.week, idx as u32 + 1);
            assert_eq!(week.days.len(), 7);
            assert_eq!(week.days[0].day, "Monday");
            assert_eq!(week.days[6].day, "Sunday");
        }
    }

    #[test]
    fn test_race_week_ends_with_marathon() {
        let plan = generate_plan(&inputs());
        let race_week = plan.weeks.last().unwrap();
        assert_eq!(race_week.target_distance, 35.0);
        assert_eq!(race_week.days[6].role(), WorkoutRole::RaceDay);
        assert_eq!(race_week.days[6].distance, 26.2);
    }

    #[test]
    fn test_week_totals_match_daily_sum() {
        let plan = generate_plan(&inputs());
        for week in &plan.weeks {
            let sum: f64 = week.days.iter().map(|d| d.distance).sum();
            assert!((week.total_distance - sum).abs() < 0.05);
        }
    }

    #[test]
    fn test_workouts_follow_distance() {
        let plan = generate_plan(&inputs());
        for day in plan.weeks.iter().flat_map(|w| w.days.iter()) {
            assert!((day.workout.total_distance() - day.distance).abs() < 1e-9);
        }
    }
}
