//! Overtime strings come in as `HH:MM` (sometimes `H:MM`).

use regex::Regex;
use std::sync::LazyLock;

static OVERTIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3}):([0-5]\d)$").expect("static overtime pattern")
});

/// Fractional hours for an overtime field. Missing, empty or malformed → 0.
pub fn overtime_hours(raw: Option<&str>) -> f64 {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0.0;
    };

    match OVERTIME_RE.captures(s) {
        Some(caps) => {
            let h: f64 = caps[1].parse().unwrap_or(0.0);
            let m: f64 = caps[2].parse().unwrap_or(0.0);
            h + m / 60.0
        }
        None => {
            tracing::debug!(value = s, "ignoring malformed overtime value");
            0.0
        }
    }
}
