// Distance helpers. All plan distances are in miles.

/// Round to the nearest half mile.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compact distance text: `8`, `8.5`, `26.2`, `2.53`.
pub fn format_distance(value: f64) -> String {
    let rounded = round_to_hundredth(value);
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
