use serde::{Deserialize, Serialize};

/// Marathon distance in meters
pub const MARATHON_METERS: f64 = 42_195.0;
/// Marathon distance in miles, as used for plan distances
pub const MARATHON_MILES: f64 = 26.2;
pub const METERS_PER_MILE: f64 = 1_609.344;

/// Aerobic fitness score (VDOT) derived from a goal time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FitnessScore(pub f64);

impl FitnessScore {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for FitnessScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceZone {
    Easy,
    Marathon,
    Threshold,
    Interval,
    Repetition,
}

impl PaceZone {
    pub const ALL: [PaceZone; 5] = [
        PaceZone::Easy,
        PaceZone::Marathon,
        PaceZone::Threshold,
        PaceZone::Interval,
        PaceZone::Repetition,
    ];

    /// Single-letter code used in workout descriptions ("at T pace").
    pub fn code(&self) -> &'static str {
        match self {
            PaceZone::Easy => "E",
            PaceZone::Marathon => "M",
            PaceZone::Threshold => "T",
            PaceZone::Interval => "I",
            PaceZone::Repetition => "R",
        }
    }

    /// Fractions of VDOT bounding the zone. Repetition has a single value.
    pub fn intensity_fractions(&self) -> (f64, Option<f64>) {
        match self {
            PaceZone::Easy => (0.70, Some(0.78)),
            PaceZone::Marathon => (0.82, Some(0.85)),
            PaceZone::Threshold => (0.88, Some(0.90)),
            PaceZone::Interval => (0.98, Some(1.00)),
            PaceZone::Repetition => (1.05, None),
        }
    }
}

impl std::fmt::Display for PaceZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaceZone::Easy => write!(f, "Easy"),
            PaceZone::Marathon => write!(f, "Marathon"),
            PaceZone::Threshold => write!(f, "Threshold"),
            PaceZone::Interval => write!(f, "Interval"),
            PaceZone::Repetition => write!(f, "Repetition"),
        }
    }
}

/// Pace band for one zone, in seconds per mile.
///
/// `slow` comes from the lower intensity fraction, `fast` from the upper one;
/// Repetition only has a single approximate value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceRange {
    pub zone: PaceZone,
    pub slow_seconds_per_mile: f64,
    pub fast_seconds_per_mile: Option<f64>,
    pub label: String,
}

impl PaceRange {
    pub fn new(zone: PaceZone, slow: f64, fast: Option<f64>) -> Self {
        let label = match fast {
            Some(fast) => format!("{}-{}/mi", format_pace(slow), format_pace(fast)),
            None => format!("~{}/mi", format_pace(slow)),
        };
        Self {
            zone,
            slow_seconds_per_mile: slow,
            fast_seconds_per_mile: fast,
            label,
        }
    }

    /// Fastest pace in the band (smallest seconds per mile).
    pub fn fastest(&self) -> f64 {
        self.fast_seconds_per_mile.unwrap_or(self.slow_seconds_per_mile)
    }
}

/// The five training paces for a fitness score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPaces {
    pub easy: PaceRange,
    pub marathon: PaceRange,
    pub threshold: PaceRange,
    pub interval: PaceRange,
    pub repetition: PaceRange,
}

impl TrainingPaces {
    pub fn zone(&self, zone: PaceZone) -> &PaceRange {
        match zone {
            PaceZone::Easy => &self.easy,
            PaceZone::Marathon => &self.marathon,
            PaceZone::Threshold => &self.threshold,
            PaceZone::Interval => &self.interval,
            PaceZone::Repetition => &self.repetition,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaceRange> {
        PaceZone::ALL.into_iter().map(move |zone| self.zone(zone))
    }
}

/// Format seconds per mile as `M:SS` (rounded to the nearest second).
pub fn format_pace(seconds_per_mile: f64) -> String {
    let total = seconds_per_mile.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
