use crate::models::{round_to_half, RunningDayPattern, MARATHON_MILES};

const LONG_RUN_SHARE: f64 = 0.28;
const INTERVAL_SHARE: f64 = 0.18;
const INTERVAL_CAP: f64 = 10.0;
const TEMPO_SHARE: f64 = 0.20;
const TEMPO_CAP: f64 = 12.0;
const SHAKEOUT_SHARE: f64 = 0.3;
const SHAKEOUT_CAP: f64 = 4.0;

/// Split a week's total miles across Monday..Sunday.
///
/// Non-running days always get 0. Every value is a multiple of half a mile
/// except race day, which is the marathon distance.
pub fn distribute_week(
    weekly_total: f64,
    week: u32,
    training_weeks: u32,
    pattern: &RunningDayPattern,
) -> [f64; 7] {
    if week == training_weeks {
        distribute_race_week(weekly_total, pattern)
    } else {
        distribute_training_week(weekly_total, pattern)
    }
}

fn distribute_training_week(weekly_total: f64, pattern: &RunningDayPattern) -> [f64; 7] {
    let mut daily = [0.0; 7];

    let Some(long_run_slot) = pattern.long_run_slot() else {
        return daily;
    };

    let mut structured = vec![long_run_slot];
    daily[long_run_slot] = round_to_half(weekly_total * LONG_RUN_SHARE);

    if let Some(slot) = pattern.interval_slot() {
        daily[slot] = round_to_half(INTERVAL_CAP.min(weekly_total * INTERVAL_SHARE));
        structured.push(slot);
    }

    if let Some(slot) = pattern.tempo_slot() {
        daily[slot] = round_to_half(TEMPO_CAP.min(weekly_total * TEMPO_SHARE));
        structured.push(slot);
    }

    let reserved: f64 = daily.iter().sum();
    let easy_days: Vec<usize> = pattern
        .running_day_indices()
        .into_iter()
        .filter(|idx| !structured.contains(idx))
        .collect();

    if !easy_days.is_empty() {
        let easy_miles =
            round_to_half((weekly_total - reserved) / easy_days.len() as f64).max(0.0);
        for idx in &easy_days {
            daily[*idx] = easy_miles;
        }
    }

    // Rounding leftovers go on the long run.
    let diff = round_to_half(weekly_total - daily.iter().sum::<f64>());
    if diff != 0.0 {
        daily[long_run_slot] = round_to_half(daily[long_run_slot] + diff);
    }

    daily
}

fn distribute_race_week(weekly_total: f64, pattern: &RunningDayPattern) -> [f64; 7] {
    let mut daily = [0.0; 7];

    let Some(race_slot) = pattern.long_run_slot() else {
        return daily;
    };
    daily[race_slot] = MARATHON_MILES;

    let easy_days: Vec<usize> = pattern
        .running_day_indices()
        .into_iter()
        .filter(|&idx| idx != race_slot)
        .collect();
    let easy_miles = weekly_total - MARATHON_MILES;

    if let Some((&first, rest)) = easy_days.split_first() {
        if easy_miles > 0.0 {
            let shakeout = SHAKEOUT_CAP.min(easy_miles * SHAKEOUT_SHARE);
            let per_day = if rest.is_empty() {
                0.0
            } else {
                (easy_miles - shakeout) / rest.len() as f64
            };

            daily[first] = round_to_half(shakeout);
            for idx in rest {
                daily[*idx] = round_to_half(per_day);
            }

            // Race day is fixed, so rounding leftovers go on the shakeout.
            let diff = round_to_half(weekly_total - daily.iter().sum::<f64>());
            if diff != 0.0 {
                daily[first] = round_to_half(daily[first] + diff).max(0.0);
            }
        }
    }

    daily
}
