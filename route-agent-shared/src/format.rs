//! Display formatting for route totals. Per-step strings come preformatted from the backend.

/// Kilometres with one decimal, e.g. `12.34` -> `"12.3"`.
pub fn format_distance_km(km: f64) -> String {
    format!("{:.1}", km)
}

/// `"45 min"` under an hour, otherwise `"1h 30min"`, or `"2h"` on whole hours.
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, mins)
    }
}
