//! Hour totals are always derived from raw minute sums. Conversion and
//! rounding happen once, at the level being displayed; rounded values never
//! feed back into a sum.

pub fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / 60.0
}

/// Rounds to exactly two decimals, half up.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", round2(hours))
}

/// The exported reports target a decimal-comma locale.
pub fn format_hours_csv(hours: f64) -> String {
    format_hours(hours).replace('.', ",")
}
