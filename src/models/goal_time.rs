use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Accepts `H:MM:SS` and `HH:MM:SS` (hours up to 59).
pub static GOAL_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]|[0-5][0-9]):([0-5][0-9]):([0-5][0-9])$").unwrap()
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalTimeError {
    #[error("Goal time must be in format HH:MM:SS (e.g., 4:00:00), got '{0}'")]
    InvalidFormat(String),
    #[error("Goal time must be greater than zero")]
    Zero,
}

/// Target marathon finish time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoalTime {
    total_seconds: u32,
}

impl GoalTime {
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Result<Self, GoalTimeError> {
        let total_seconds = hours * 3600 + minutes * 60 + seconds;
        if total_seconds == 0 {
            return Err(GoalTimeError::Zero);
        }
        Ok(Self { total_seconds })
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn total_minutes(&self) -> f64 {
        self.total_seconds as f64 / 60.0
    }

    pub fn hours(&self) -> u32 {
        self.total_seconds / 3600
    }

    pub fn minutes(&self) -> u32 {
        (self.total_seconds % 3600) / 60
    }

    pub fn seconds(&self) -> u32 {
        self.total_seconds % 60
    }
}

impl std::fmt::Display for GoalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds())
    }
}

impl std::str::FromStr for GoalTime {
    type Err = GoalTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let captures = GOAL_TIME_PATTERN
            .captures(trimmed)
            .ok_or_else(|| GoalTimeError::InvalidFormat(s.to_string()))?;

        let part = |idx: usize| -> Result<u32, GoalTimeError> {
            captures
                .get(idx)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .ok_or_else(|| GoalTimeError::InvalidFormat(s.to_string()))
        };

        GoalTime::from_hms(part(1)?, part(2)?, part(3)?)
    }
}

impl Serialize for GoalTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GoalTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Format a duration in seconds as `H:MM:SS`.
pub fn format_marathon_time(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Finish time for a full marathon run at an even pace (seconds per mile).
pub fn marathon_time_from_pace(pace_seconds_per_mile: f64) -> String {
    format_marathon_time(pace_seconds_per_mile * super::pace::MARATHON_MILES)
}
