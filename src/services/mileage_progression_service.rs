use crate::models::MARATHON_MILES;

/// Upper bound on the easy running added to race week on top of the marathon.
const RACE_WEEK_EXTRA_CAP: f64 = 12.0;
const RACE_WEEK_EXTRA_FRACTION: f64 = 0.3;
/// Number of weeks at the end of the block that are not part of the build.
const NON_BUILD_WEEKS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPhase {
    Build,
    Taper,
    RaceWeek,
}

pub fn training_phase(week: u32, training_weeks: u32) -> TrainingPhase {
    if week == training_weeks {
        TrainingPhase::RaceWeek
    } else if week + 2 >= training_weeks {
        TrainingPhase::Taper
    } else {
        TrainingPhase::Build
    }
}

/// Target total miles for `week` (1-based) of a block.
///
/// Build weeks climb linearly from `current` toward `peak`, the two taper
/// weeks drop from roughly 73% to 67% of peak, and race week holds the
/// marathon plus a small allowance of easy running.
pub fn weekly_target_distance(week: u32, training_weeks: u32, current: u32, peak: u32) -> f64 {
    let current = current as f64;
    let peak = peak as f64;

    match training_phase(week, training_weeks) {
        TrainingPhase::RaceWeek => {
            (MARATHON_MILES + RACE_WEEK_EXTRA_CAP.min(current * RACE_WEEK_EXTRA_FRACTION)).floor()
        }
        TrainingPhase::Taper => {
            let progress = training_weeks.saturating_sub(week) as f64 / 3.0;
            (peak * (0.6 + 0.2 * progress)).floor()
        }
        TrainingPhase::Build => {
            // Blocks shorter than four weeks have no build denominator; clamp it.
            let weeks_to_build = training_weeks.saturating_sub(NON_BUILD_WEEKS).max(1) as f64;
            let progress = (week.saturating_sub(1)) as f64 / weeks_to_build;
            (current + (peak - current) * progress).floor()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        assert_eq!(training_phase(1, 12), TrainingPhase::Build);
        assert_eq!(training_phase(9, 12), TrainingPhase::Build);
        assert_eq!(training_phase(10, 12), TrainingPhase::Taper);
        assert_eq!(training_phase(11, 12), TrainingPhase::Taper);
        assert_eq!(training_phase(12, 12), TrainingPhase::RaceWeek);
    }

    #[test]
    fn test_twelve_week_block() {
        let targets: Vec<f64> = (1..=12)
            .map(|week| weekly_target_distance(week, 12, 30, 50))
            .collect();
        assert_eq!(
            targets,
            vec![30.0, 32.0, 34.0, 36.0, 38.0, 41.0, 43.0, 45.0, 47.0, 36.0, 33.0, 35.0]
        );
    }

    #[test]
    fn test_race_week_caps_extra_running() {
        assert_eq!(weekly_target_distance(16, 16, 10, 40), 29.0);
        assert_eq!(weekly_target_distance(16, 16, 80, 100), 38.0);
    }

    #[test]
    fn test_short_block_does_not_divide_by_zero() {
        for training_weeks in 1..=3 {
            for week in 1..=training_weeks {
                let target = weekly_target_distance(week, training_weeks, 30, 50);
                assert!(target.is_finite());
            }
        }
    }
}
