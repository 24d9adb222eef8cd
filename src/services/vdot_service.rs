use crate::models::{
    FitnessScore, GoalTime, PaceRange, PaceZone, TrainingPaces, MARATHON_METERS, METERS_PER_MILE,
};

// Oxygen cost of running: vo2 = A + B*v + C*v^2 (v in meters per minute)
const VO2_INTERCEPT: f64 = -4.60;
const VO2_LINEAR: f64 = 0.182258;
const VO2_QUADRATIC: f64 = 0.000104;

/// Oxygen cost (ml/kg/min) of running at `velocity` meters per minute.
pub fn oxygen_cost(velocity: f64) -> f64 {
    VO2_INTERCEPT + VO2_LINEAR * velocity + VO2_QUADRATIC * velocity.powi(2)
}

/// Fraction of VO2max sustainable for a race lasting `minutes`.
pub fn percent_max(minutes: f64) -> f64 {
    0.8 + 0.1894393 * (-0.012778 * minutes).exp() + 0.2989558 * (-0.1932605 * minutes).exp()
}

/// VDOT for a marathon run in `goal`, rounded to one decimal.
pub fn fitness_score(goal: &GoalTime) -> FitnessScore {
    let minutes = goal.total_minutes();
    let velocity = MARATHON_METERS / minutes;
    let vdot = oxygen_cost(velocity) / percent_max(minutes);

    FitnessScore((vdot * 10.0).round() / 10.0)
}

/// Velocity (meters per minute) whose oxygen cost equals `target_vo2`.
fn velocity_for_vo2(target_vo2: f64) -> f64 {
    // Positive root of C*v^2 + B*v - (4.60 + target) = 0
    let a = VO2_QUADRATIC;
    let b = VO2_LINEAR;
    let c = VO2_INTERCEPT - target_vo2;

    let discriminant = b.powi(2) - 4.0 * a * c;
    (-b + discriminant.sqrt()) / (2.0 * a)
}

/// Seconds per mile when running at `intensity` × VDOT.
pub fn pace_seconds_per_mile(vdot: FitnessScore, intensity: f64) -> f64 {
    let velocity = velocity_for_vo2(vdot.value() * intensity);
    METERS_PER_MILE / velocity * 60.0
}

pub fn pace_range(vdot: FitnessScore, zone: PaceZone) -> PaceRange {
    let (lower, upper) = zone.intensity_fractions();
    PaceRange::new(
        zone,
        pace_seconds_per_mile(vdot, lower),
        upper.map(|fraction| pace_seconds_per_mile(vdot, fraction)),
    )
}

pub fn training_paces(vdot: FitnessScore) -> TrainingPaces {
    TrainingPaces {
        easy: pace_range(vdot, PaceZone::Easy),
        marathon: pace_range(vdot, PaceZone::Marathon),
        threshold: pace_range(vdot, PaceZone::Threshold),
        interval: pace_range(vdot, PaceZone::Interval),
        repetition: pace_range(vdot, PaceZone::Repetition),
    }
}

/// Fitness score and the five training paces for a marathon goal time.
pub fn compute_fitness_and_paces(goal: &GoalTime) -> (FitnessScore, TrainingPaces) {
    let vdot = fitness_score(goal);
    let paces = training_paces(vdot);

    tracing::debug!("Goal {} -> VDOT {}", goal, vdot);

    (vdot, paces)
}
