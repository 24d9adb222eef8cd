use chrono::NaiveDate;
use marathon_plan::models::*;
use marathon_plan::services::{
    build_workout, compute_fitness_and_paces, distribute_week, fitness_score, generate_plan,
    training_phase, weekly_target_distance, TrainingPhase,
};
use proptest::prelude::*;

fn goal_time() -> impl Strategy<Value = GoalTime> {
    // 2:00:00 to 7:00:00
    (7_200u32..=25_200).prop_map(|total| {
        GoalTime::from_hms(total / 3600, (total % 3600) / 60, total % 60).unwrap()
    })
}

fn plan_inputs() -> impl Strategy<Value = PlanInputs> {
    (8u32..=20, 10u32..=80, 1u32..=40, 3u32..=7, goal_time()).prop_map(
        |(training_weeks, current, extra, days_per_week, goal_time)| PlanInputs {
            marathon_date: NaiveDate::from_ymd_opt(2027, 5, 2).unwrap(),
            training_weeks,
            current_weekly_miles: current,
            peak_weekly_miles: (current + extra).min(100),
            days_per_week,
            goal_time,
        },
    )
}

proptest! {
    #[test]
    fn paces_are_strictly_ordered(goal in goal_time()) {
        let (_, paces) = compute_fitness_and_paces(&goal);

        prop_assert!(paces.easy.fastest() > paces.marathon.slow_seconds_per_mile);
        prop_assert!(paces.marathon.fastest() > paces.threshold.slow_seconds_per_mile);
        prop_assert!(paces.threshold.fastest() > paces.interval.slow_seconds_per_mile);
        prop_assert!(paces.interval.fastest() > paces.repetition.slow_seconds_per_mile);
    }

    #[test]
    fn faster_goals_score_higher(a in 7_200u32..=25_000, gap in 60u32..=600) {
        let faster = GoalTime::from_hms(a / 3600, (a % 3600) / 60, a % 60).unwrap();
        let b = a + gap;
        let slower = GoalTime::from_hms(b / 3600, (b % 3600) / 60, b % 60).unwrap();

        prop_assert!(fitness_score(&faster).value() >= fitness_score(&slower).value());
    }

    #[test]
    fn build_weeks_never_decrease(weeks in 8u32..=20, current in 10u32..=80, extra in 1u32..=40) {
        let peak = current + extra;
        let build: Vec<f64> = (1..=weeks)
            .filter(|&w| training_phase(w, weeks) == TrainingPhase::Build)
            .map(|w| weekly_target_distance(w, weeks, current, peak))
            .collect();

        prop_assert_eq!(build[0], current as f64);
        for pair in build.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn taper_weeks_never_increase(weeks in 8u32..=20, current in 10u32..=80, extra in 1u32..=40) {
        let peak = current + extra;
        let taper: Vec<f64> = (1..=weeks)
            .filter(|&w| training_phase(w, weeks) == TrainingPhase::Taper)
            .map(|w| weekly_target_distance(w, weeks, current, peak))
            .collect();

        prop_assert_eq!(taper.len(), 2);
        prop_assert!(taper[1] <= taper[0]);
    }

    #[test]
    fn distribution_covers_the_week(
        total in 10u32..=100,
        days in 3u32..=7,
        race_week in any::<bool>(),
    ) {
        let pattern = RunningDayPattern::for_days_per_week(days);
        let total = if race_week { (total % 12 + 29) as f64 } else { total as f64 };
        let week = if race_week { 12 } else { 5 };
        let daily = distribute_week(total, week, 12, &pattern);

        let sum: f64 = daily.iter().sum();
        prop_assert!((sum - total).abs() <= 0.5 + 1e-9, "sum {} vs total {}", sum, total);

        for (idx, miles) in daily.iter().enumerate() {
            prop_assert!(*miles >= 0.0);
            if !pattern.is_running_day(idx) {
                prop_assert_eq!(*miles, 0.0);
            }
        }
    }

    #[test]
    fn structured_workouts_reconcile(half_miles in 12u32..=60) {
        let distance = half_miles as f64 * 0.5;
        let structured = [
            WorkoutRole::IntervalDay,
            WorkoutRole::TempoDay,
            WorkoutRole::LongRunWithTempo,
        ];
        for role in structured {
            let workout = build_workout(role, distance);
            prop_assert!((workout.total_distance() - distance).abs() < 1e-6);
            prop_assert!(workout.cooldown >= 0.0);
        }
    }

    #[test]
    fn generated_plans_are_consistent(inputs in plan_inputs()) {
        let plan = generate_plan(&inputs);

        prop_assert_eq!(plan.weeks.len(), inputs.training_weeks as usize);
        for week in &plan.weeks {
            prop_assert_eq!(week.days.len(), 7);
            for day in &week.days {
                prop_assert!((day.workout.total_distance() - day.distance).abs() < 1e-6);
                prop_assert_eq!(day.is_rest(), day.distance == 0.0);
            }
        }
        prop_assert_eq!(&plan, &generate_plan(&inputs));
    }

    #[test]
    fn json_output_rebuilds_the_plan(inputs in plan_inputs()) {
        let plan = generate_plan(&inputs);
        let json = serde_json::to_string(&plan).unwrap();
        let restored: GeneratedPlan = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored, plan);
    }
}
