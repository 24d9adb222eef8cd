use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::goal_time::GoalTime;
use super::pace::{FitnessScore, PaceZone, TrainingPaces};

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Validated inputs for one plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    pub marathon_date: NaiveDate,
    pub training_weeks: u32,
    pub current_weekly_miles: u32,
    pub peak_weekly_miles: u32,
    pub days_per_week: u32,
    pub goal_time: GoalTime,
}

// ---------------------------------------------------------------------------
// Running-day patterns
// ---------------------------------------------------------------------------

/// Days per week used when no pattern matches the requested count.
pub const FALLBACK_DAYS_PER_WEEK: u32 = 5;

const RUNNING_DAY_PATTERNS: [(u32, [bool; 7]); 5] = [
    (7, [true, true, true, true, true, true, true]),
    (6, [false, true, true, true, true, true, true]),
    (5, [false, true, false, true, true, true, true]),
    (4, [false, true, false, true, false, true, true]),
    (3, [false, true, false, false, false, true, true]),
];

/// Which days of the week (Monday first) include a run, plus the slot roles.
///
/// Quality sessions sit on fixed week slots (index 1 and 3) when those days are
/// running days; the long run is always the last running day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningDayPattern {
    days: [bool; 7],
}

impl RunningDayPattern {
    pub const INTERVAL_SLOT: usize = 1;
    pub const TEMPO_SLOT: usize = 3;

    /// Look up the pattern for a days-per-week count.
    ///
    /// Counts without a pattern fall back to the 5-day layout.
    pub fn for_days_per_week(days_per_week: u32) -> Self {
        match Self::lookup(days_per_week) {
            Some(pattern) => pattern,
            None => {
                tracing::warn!(
                    "No running-day pattern for {} days per week, falling back to {}",
                    days_per_week,
                    FALLBACK_DAYS_PER_WEEK
                );
                Self::lookup(FALLBACK_DAYS_PER_WEEK).unwrap_or(Self { days: [true; 7] })
            }
        }
    }

    pub fn lookup(days_per_week: u32) -> Option<Self> {
        RUNNING_DAY_PATTERNS
            .iter()
            .find(|(count, _)| *count == days_per_week)
            .map(|(_, days)| Self { days: *days })
    }

    pub fn from_days(days: [bool; 7]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> [bool; 7] {
        self.days
    }

    pub fn is_running_day(&self, day_index: usize) -> bool {
        self.days.get(day_index).copied().unwrap_or(false)
    }

    pub fn running_day_indices(&self) -> Vec<usize> {
        (0..7).filter(|&idx| self.days[idx]).collect()
    }

    pub fn running_day_count(&self) -> usize {
        self.days.iter().filter(|&&running| running).count()
    }

    /// Index of the long-run (and race-day) slot.
    pub fn long_run_slot(&self) -> Option<usize> {
        (0..7).rev().find(|&idx| self.days[idx])
    }

    pub fn interval_slot(&self) -> Option<usize> {
        self.is_running_day(Self::INTERVAL_SLOT)
            .then_some(Self::INTERVAL_SLOT)
            .filter(|&slot| Some(slot) != self.long_run_slot())
    }

    pub fn tempo_slot(&self) -> Option<usize> {
        self.is_running_day(Self::TEMPO_SLOT)
            .then_some(Self::TEMPO_SLOT)
            .filter(|&slot| Some(slot) != self.long_run_slot())
    }
}

// ---------------------------------------------------------------------------
// Workouts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutRole {
    Rest,
    RaceDay,
    RaceWeekEasy,
    IntervalDay,
    TempoDay,
    LongRunWithTempo,
    LongRunEasy,
    EasyRun,
}

/// Coarse grouping used by presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    Race,
    Quality,
    LongRun,
    Easy,
    Rest,
}

impl WorkoutRole {
    /// Label shown in the "Workout Type" column.
    pub fn workout_type(&self) -> &'static str {
        match self {
            WorkoutRole::Rest => "Rest Day",
            WorkoutRole::RaceDay => "RACE DAY 🏁",
            WorkoutRole::RaceWeekEasy => "Easy Run",
            WorkoutRole::IntervalDay => "Interval Workout",
            WorkoutRole::TempoDay => "Tempo Run",
            WorkoutRole::LongRunWithTempo => "Long Run with Marathon Pace",
            WorkoutRole::LongRunEasy => "Long Run",
            WorkoutRole::EasyRun => "Easy Run",
        }
    }

    pub fn category(&self) -> WorkoutCategory {
        match self {
            WorkoutRole::Rest => WorkoutCategory::Rest,
            WorkoutRole::RaceDay => WorkoutCategory::Race,
            WorkoutRole::IntervalDay | WorkoutRole::TempoDay => WorkoutCategory::Quality,
            WorkoutRole::LongRunWithTempo | WorkoutRole::LongRunEasy => WorkoutCategory::LongRun,
            WorkoutRole::RaceWeekEasy | WorkoutRole::EasyRun => WorkoutCategory::Easy,
        }
    }
}

impl std::fmt::Display for WorkoutRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.workout_type())
    }
}

/// The main block of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainSet {
    pub label: String,
    pub distance: f64,
    pub zone: PaceZone,
}

/// A fully assembled workout. Segment distances add up to the day's distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub role: WorkoutRole,
    pub workout_type: String,
    pub warmup: f64,
    pub main_set: Option<MainSet>,
    pub recovery: Option<String>,
    pub recovery_distance: f64,
    pub cooldown: f64,
    pub purpose: String,
    pub description: String,
}

impl Workout {
    pub fn main_distance(&self) -> f64 {
        self.main_set.as_ref().map(|m| m.distance).unwrap_or(0.0)
    }

    pub fn total_distance(&self) -> f64 {
        self.warmup + self.main_distance() + self.recovery_distance + self.cooldown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWorkout {
    pub day: String,
    pub distance: f64,
    #[serde(flatten)]
    pub workout: Workout,
}

impl DailyWorkout {
    pub fn role(&self) -> WorkoutRole {
        self.workout.role
    }

    pub fn workout_type(&self) -> &str {
        &self.workout.workout_type
    }

    pub fn description(&self) -> &str {
        &self.workout.description
    }

    pub fn is_rest(&self) -> bool {
        self.distance == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week: u32,
    pub target_distance: f64,
    pub total_distance: f64,
    pub days: Vec<DailyWorkout>,
}

impl WeeklyPlan {
    pub fn long_run(&self) -> Option<&DailyWorkout> {
        self.days
            .iter()
            .filter(|d| d.role().category() == WorkoutCategory::LongRun)
            .max_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// Complete output of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub vdot: FitnessScore,
    pub paces: TrainingPaces,
    pub goal_time: GoalTime,
    pub inputs: PlanInputs,
    pub weeks: Vec<WeeklyPlan>,
}

/// Headline numbers for a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_distance: f64,
    pub peak_week: u32,
    pub peak_week_distance: f64,
    pub longest_training_run: f64,
    pub quality_sessions: usize,
    pub rest_days: usize,
}

impl GeneratedPlan {
    pub fn summary(&self) -> PlanSummary {
        let total_distance = super::distance::round_to_tenth(
            self.weeks.iter().map(|w| w.total_distance).sum(),
        );

        let (peak_week, peak_week_distance) = self
            .weeks
            .iter()
            .map(|w| (w.week, w.total_distance))
            .fold((0, 0.0), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            });

        let days = || self.weeks.iter().flat_map(|w| w.days.iter());

        let longest_training_run = days()
            .filter(|d| d.role() != WorkoutRole::RaceDay)
            .map(|d| d.distance)
            .fold(0.0, f64::max);

        let quality_sessions = days()
            .filter(|d| {
                matches!(
                    d.role(),
                    WorkoutRole::IntervalDay | WorkoutRole::TempoDay | WorkoutRole::LongRunWithTempo
                )
            })
            .count();

        let rest_days = days().filter(|d| d.role() == WorkoutRole::Rest).count();

        PlanSummary {
            total_distance,
            peak_week,
            peak_week_distance,
            longest_training_run,
            quality_sessions,
            rest_days,
        }
    }
}
