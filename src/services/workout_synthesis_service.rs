use crate::models::{
    format_distance, round_to_half, round_to_hundredth, MainSet, PaceZone, RunningDayPattern,
    Workout, WorkoutRole,
};

const QUALITY_MIN_MILES: f64 = 5.0;
const LONG_RUN_TEMPO_MIN_MILES: f64 = 8.0;
/// Every third week moves the tempo work into the long run.
const TEMPO_IN_LONG_RUN_EVERY: u32 = 3;

const INTERVAL_WARMUP: f64 = 1.5;
const INTERVAL_COOLDOWN: f64 = 1.5;
const LONG_INTERVAL_THRESHOLD: f64 = 5.0;
const RECOVERY_JOG: f64 = 0.25;
const TEMPO_WARMUP: f64 = 1.5;
const TEMPO_COOLDOWN: f64 = 1.5;
const LONG_RUN_WARMUP: f64 = 2.0;
const LONG_RUN_COOLDOWN: f64 = 2.0;

pub fn is_tempo_in_long_run_week(week: u32) -> bool {
    week % TEMPO_IN_LONG_RUN_EVERY == 0
}

/// Decide what kind of session a day holds. First match wins.
pub fn assign_role(
    distance: f64,
    week: u32,
    training_weeks: u32,
    day_index: usize,
    pattern: &RunningDayPattern,
) -> WorkoutRole {
    let day = Some(day_index);
    let is_long_run_slot = day == pattern.long_run_slot();
    let race_week = week == training_weeks;
    let tempo_in_long_run = is_tempo_in_long_run_week(week);

    if distance == 0.0 {
        WorkoutRole::Rest
    } else if race_week && is_long_run_slot {
        WorkoutRole::RaceDay
    } else if race_week {
        WorkoutRole::RaceWeekEasy
    } else if day == pattern.interval_slot() && distance > QUALITY_MIN_MILES {
        WorkoutRole::IntervalDay
    } else if day == pattern.tempo_slot() && distance > QUALITY_MIN_MILES && !tempo_in_long_run {
        WorkoutRole::TempoDay
    } else if is_long_run_slot && tempo_in_long_run && distance > LONG_RUN_TEMPO_MIN_MILES {
        WorkoutRole::LongRunWithTempo
    } else if is_long_run_slot {
        WorkoutRole::LongRunEasy
    } else {
        WorkoutRole::EasyRun
    }
}

/// Build the workout for a day. Segment distances always add up to `distance`.
pub fn build_workout(role: WorkoutRole, distance: f64) -> Workout {
    match role {
        WorkoutRole::IntervalDay => interval_workout(distance),
        WorkoutRole::TempoDay => tempo_workout(distance),
        WorkoutRole::LongRunWithTempo => long_run_with_tempo(distance),
        WorkoutRole::LongRunEasy => steady_run(
            role,
            distance,
            "Build aerobic endurance",
            "Easy long run at E pace - Build endurance",
        ),
        WorkoutRole::EasyRun => steady_run(
            role,
            distance,
            "Recovery and base building",
            "Recovery run at E pace",
        ),
        WorkoutRole::RaceWeekEasy => steady_run(
            role,
            distance,
            "Stay loose before race day",
            "Easy shakeout at E pace",
        ),
        WorkoutRole::RaceDay => Workout {
            role,
            workout_type: role.workout_type().to_string(),
            warmup: 0.0,
            main_set: Some(MainSet {
                label: "Marathon race".to_string(),
                distance,
                zone: PaceZone::Marathon,
            }),
            recovery: None,
            recovery_distance: 0.0,
            cooldown: 0.0,
            purpose: "Race day".to_string(),
            description: "Marathon Race - Give it your all!".to_string(),
        },
        WorkoutRole::Rest => Workout {
            role,
            workout_type: role.workout_type().to_string(),
            warmup: 0.0,
            main_set: None,
            recovery: None,
            recovery_distance: 0.0,
            cooldown: 0.0,
            purpose: "Recovery and adaptation".to_string(),
            description: "Recovery day".to_string(),
        },
    }
}

fn steady_run(role: WorkoutRole, distance: f64, purpose: &str, description: &str) -> Workout {
    Workout {
        role,
        workout_type: role.workout_type().to_string(),
        warmup: 0.0,
        main_set: Some(MainSet {
            label: format!("{} miles at E pace", format_distance(distance)),
            distance,
            zone: PaceZone::Easy,
        }),
        recovery: None,
        recovery_distance: 0.0,
        cooldown: 0.0,
        purpose: purpose.to_string(),
        description: description.to_string(),
    }
}

fn interval_workout(distance: f64) -> Workout {
    let warmup = INTERVAL_WARMUP;
    let remaining = round_to_half(distance - INTERVAL_WARMUP - INTERVAL_COOLDOWN);

    // 1000m repeats when there is room for them, 400m repeats otherwise
    let (rep_distance, rep_label, purpose) = if remaining >= LONG_INTERVAL_THRESHOLD {
        (0.62, "1000m", "Improve VO2max and running economy")
    } else {
        (0.25, "400m", "Improve speed and VO2max")
    };

    let repeats = (remaining / (rep_distance + RECOVERY_JOG)).floor().max(0.0) as u32;
    let work = round_to_hundredth(repeats as f64 * rep_distance);
    let recovery_distance = repeats.saturating_sub(1) as f64 * RECOVERY_JOG;
    let cooldown = round_to_hundredth(distance - warmup - work - recovery_distance);

    let main_label = format!("{}x{} at I pace", repeats, rep_label);
    let recovery = "400m jog between intervals".to_string();
    let description = format!(
        "{}mi WU + {} ({}) + {}mi CD",
        format_distance(warmup),
        main_label,
        recovery,
        format_distance(cooldown)
    );

    Workout {
        role: WorkoutRole::IntervalDay,
        workout_type: WorkoutRole::IntervalDay.workout_type().to_string(),
        warmup,
        main_set: Some(MainSet {
            label: main_label,
            distance: work,
            zone: PaceZone::Interval,
        }),
        recovery: Some(recovery),
        recovery_distance,
        cooldown,
        purpose: purpose.to_string(),
        description,
    }
}

fn tempo_workout(distance: f64) -> Workout {
    let warmup = TEMPO_WARMUP;
    let tempo = round_to_half(distance - TEMPO_WARMUP - TEMPO_COOLDOWN).max(0.0);
    let cooldown = round_to_hundredth(distance - warmup - tempo);

    let main_label = format!("{} miles at T pace", format_distance(tempo));
    let description = format!(
        "{}mi WU + {} + {}mi CD",
        format_distance(warmup),
        main_label,
        format_distance(cooldown)
    );

    Workout {
        role: WorkoutRole::TempoDay,
        workout_type: WorkoutRole::TempoDay.workout_type().to_string(),
        warmup,
        main_set: Some(MainSet {
            label: main_label,
            distance: tempo,
            zone: PaceZone::Threshold,
        }),
        recovery: None,
        recovery_distance: 0.0,
        cooldown,
        purpose: "Improve lactate threshold and tempo endurance".to_string(),
        description,
    }
}

fn long_run_with_tempo(distance: f64) -> Workout {
    let warmup = LONG_RUN_WARMUP;
    let marathon_pace = round_to_half(distance - LONG_RUN_WARMUP - LONG_RUN_COOLDOWN).max(0.0);
    let cooldown = round_to_hundredth(distance - warmup - marathon_pace);

    let main_label = format!("{} miles at M pace", format_distance(marathon_pace));
    let description = format!(
        "{}mi easy + {} + {}mi easy CD",
        format_distance(warmup),
        main_label,
        format_distance(cooldown)
    );

    Workout {
        role: WorkoutRole::LongRunWithTempo,
        workout_type: WorkoutRole::LongRunWithTempo.workout_type().to_string(),
        warmup,
        main_set: Some(MainSet {
            label: main_label,
            distance: marathon_pace,
            zone: PaceZone::Marathon,
        }),
        recovery: None,
        recovery_distance: 0.0,
        cooldown,
        purpose: "Build endurance and practice goal marathon pace".to_string(),
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_day() -> RunningDayPattern {
        RunningDayPattern::lookup(5).unwrap()
    }

    fn assert_reconciles(workout: &Workout, distance: f64) {
        assert!(
            (workout.total_distance() - distance).abs() < 1e-9,
            "{:?} does not add up to {}",
            workout,
            distance
        );
    }

    #[test]
    fn test_role_priority() {
        let pattern = five_day();
        assert_eq!(assign_role(0.0, 1, 12, 0, &pattern), WorkoutRole::Rest);
        assert_eq!(assign_role(26.2, 12, 12, 6, &pattern), WorkoutRole::RaceDay);
        assert_eq!(assign_role(6.0, 12, 12, 1, &pattern), WorkoutRole::RaceWeekEasy);
        assert_eq!(assign_role(9.0, 1, 12, 1, &pattern), WorkoutRole::IntervalDay);
        assert_eq!(assign_role(5.0, 1, 12, 1, &pattern), WorkoutRole::EasyRun);
        assert_eq!(assign_role(10.0, 1, 12, 3, &pattern), WorkoutRole::TempoDay);
        assert_eq!(assign_role(10.0, 3, 12, 3, &pattern), WorkoutRole::EasyRun);
        assert_eq!(assign_role(14.0, 3, 12, 6, &pattern), WorkoutRole::LongRunWithTempo);
        assert_eq!(assign_role(8.0, 3, 12, 6, &pattern), WorkoutRole::LongRunEasy);
        assert_eq!(assign_role(14.0, 4, 12, 6, &pattern), WorkoutRole::LongRunEasy);
        assert_eq!(assign_role(8.5, 4, 12, 4, &pattern), WorkoutRole::EasyRun);
    }

    #[test]
    fn test_long_interval_workout() {
        let workout = build_workout(WorkoutRole::IntervalDay, 9.0);
        assert_eq!(workout.main_set.as_ref().unwrap().label, "6x1000m at I pace");
        assert_eq!(workout.recovery_distance, 1.25);
        assert_eq!(workout.cooldown, 2.53);
        assert_eq!(
            workout.description,
            "1.5mi WU + 6x1000m at I pace (400m jog between intervals) + 2.53mi CD"
        );
        assert_reconciles(&workout, 9.0);
    }

    #[test]
    fn test_short_interval_workout() {
        let workout = build_workout(WorkoutRole::IntervalDay, 6.0);
        assert_eq!(workout.main_set.as_ref().unwrap().label, "6x400m at I pace");
        assert_eq!(workout.cooldown, 1.75);
        assert_reconciles(&workout, 6.0);
    }

    #[test]
    fn test_tempo_workout() {
        let workout = build_workout(WorkoutRole::TempoDay, 10.0);
        assert_eq!(workout.description, "1.5mi WU + 7 miles at T pace + 1.5mi CD");
        assert_eq!(workout.main_set.as_ref().unwrap().zone, PaceZone::Threshold);
        assert_reconciles(&workout, 10.0);
    }

    #[test]
    fn test_long_run_with_marathon_pace() {
        let workout = build_workout(WorkoutRole::LongRunWithTempo, 13.5);
        assert_eq!(
            workout.description,
            "2mi easy + 9.5 miles at M pace + 2mi easy CD"
        );
        assert_reconciles(&workout, 13.5);
    }

    #[test]
    fn test_every_role_reconciles() {
        let roles = [
            WorkoutRole::RaceDay,
            WorkoutRole::RaceWeekEasy,
            WorkoutRole::IntervalDay,
            WorkoutRole::TempoDay,
            WorkoutRole::LongRunWithTempo,
            WorkoutRole::LongRunEasy,
            WorkoutRole::EasyRun,
        ];
        for role in roles {
            for half_miles in 11..=50 {
                let distance = half_miles as f64 / 2.0;
                assert_reconciles(&build_workout(role, distance), distance);
            }
        }
        assert_reconciles(&build_workout(WorkoutRole::Rest, 0.0), 0.0);
    }

    #[test]
    fn test_race_day_description_is_fixed() {
        let workout = build_workout(WorkoutRole::RaceDay, 26.2);
        assert_eq!(workout.workout_type, "RACE DAY 🏁");
        assert_eq!(workout.description, "Marathon Race - Give it your all!");
    }
}
