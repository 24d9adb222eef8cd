use chrono::NaiveDate;
use marathon_plan::models::*;
use marathon_plan::services::{
    compute_fitness_and_paces, distribute_week, generate_plan, parse_week_totals,
    render_plan_json, render_plan_text, weekly_target_distance,
};
use pretty_assertions::assert_eq;

fn inputs(
    training_weeks: u32,
    current: u32,
    peak: u32,
    days_per_week: u32,
    goal: &str,
) -> PlanInputs {
    PlanInputs {
        marathon_date: NaiveDate::from_ymd_opt(2026, 4, 19).unwrap(),
        training_weeks,
        current_weekly_miles: current,
        peak_weekly_miles: peak,
        days_per_week,
        goal_time: goal.parse().unwrap(),
    }
}

#[test]
fn test_four_hour_goal_paces() {
    let (vdot, paces) = compute_fitness_and_paces(&"4:00:00".parse().unwrap());

    assert_eq!(vdot.value(), 37.9);
    assert_eq!(paces.easy.label, "10:16-9:25/mi");
    assert_eq!(paces.marathon.label, "9:03-8:48/mi");
    assert_eq!(paces.threshold.label, "8:33-8:24/mi");
    assert_eq!(paces.interval.label, "7:51-7:43/mi");
    assert_eq!(paces.repetition.label, "~7:25/mi");

    // Easy is slower than marathon pace
    assert!(paces.easy.fastest() > paces.marathon.slow_seconds_per_mile);
}

#[test]
fn test_twelve_week_progression() {
    let targets: Vec<f64> = (1..=12)
        .map(|week| weekly_target_distance(week, 12, 30, 50))
        .collect();

    assert_eq!(
        targets,
        vec![30.0, 32.0, 34.0, 36.0, 38.0, 41.0, 43.0, 45.0, 47.0, 36.0, 33.0, 35.0]
    );
}

#[test]
fn test_five_day_week_layout() {
    let pattern = RunningDayPattern::for_days_per_week(5);
    let daily = distribute_week(50.0, 4, 12, &pattern);

    let rest_days = daily.iter().filter(|&&d| d == 0.0).count();
    assert_eq!(rest_days, 2);

    let long_run = daily[pattern.long_run_slot().unwrap()];
    assert!(daily.iter().all(|&d| d <= long_run));
}

#[test]
fn test_text_report_round_trip() {
    for days in 3..=7 {
        let plan = generate_plan(&inputs(16, 25, 55, days, "3:30:00"));
        let parsed = parse_week_totals(&render_plan_text(&plan));
        let expected: Vec<(u32, f64)> = plan
            .weeks
            .iter()
            .map(|w| (w.week, w.total_distance))
            .collect();
        assert_eq!(parsed, expected);
    }
}

#[test]
fn test_plan_roles_per_week() {
    let plan = generate_plan(&inputs(12, 30, 50, 5, "4:00:00"));

    let week_3 = &plan.weeks[2];
    assert!(week_3
        .days
        .iter()
        .any(|d| d.role() == WorkoutRole::LongRunWithTempo));
    assert!(week_3.days.iter().all(|d| d.role() != WorkoutRole::TempoDay));

    let week_4 = &plan.weeks[3];
    assert_eq!(week_4.days[1].role(), WorkoutRole::IntervalDay);
    assert_eq!(week_4.days[3].role(), WorkoutRole::TempoDay);
    assert_eq!(week_4.days[6].role(), WorkoutRole::LongRunEasy);

    let race_week = plan.weeks.last().unwrap();
    assert_eq!(race_week.days[6].role(), WorkoutRole::RaceDay);
    assert!(race_week.days[..6]
        .iter()
        .all(|d| matches!(d.role(), WorkoutRole::Rest | WorkoutRole::RaceWeekEasy)));
}

#[test]
fn test_plan_summary() {
    let plan = generate_plan(&inputs(12, 30, 50, 5, "4:00:00"));
    let summary = plan.summary();

    assert_eq!(summary.peak_week, 9);
    assert_eq!(summary.peak_week_distance, 47.0);
    assert_eq!(summary.rest_days, 24);
    assert!(summary.quality_sessions > 0);
    assert!(summary.longest_training_run < MARATHON_MILES);
}

#[test]
fn test_generation_is_deterministic() {
    let request = inputs(18, 40, 70, 6, "3:00:00");
    assert_eq!(generate_plan(&request), generate_plan(&request));
}

#[test]
fn test_json_round_trip_preserves_plan() {
    let goals = ["2:47:13", "3:33:33", "3:59:59", "4:12:07", "4:44:44", "5:00:00", "6:21:09"];

    for goal in goals {
        for days in 3..=7 {
            for weeks in [8, 13, 20] {
                let plan = generate_plan(&inputs(weeks, 20, 35, days, goal));
                let json = render_plan_json(&plan).unwrap();
                let restored: GeneratedPlan = serde_json::from_str(&json).unwrap();
                assert_eq!(restored, plan, "goal {} days {} weeks {}", goal, days, weeks);
            }
        }
    }
}
