const MINUTES_PER_HOUR: f64 = 60.0;

/// Formats a travel time given in hours, to the nearest minute.
///
/// ```rust
/// use dragroute::resolve::route::format_travel_time;
/// assert_eq!(format_travel_time(0.1), "6 minutes");
/// assert_eq!(format_travel_time(1.5), "1 hour 30 minutes");
/// ```
pub fn format_travel_time(hours: f64) -> String {
    let total = (hours.max(0.0) * MINUTES_PER_HOUR).round() as u64;
    let (hours, minutes) = (total / 60, total % 60);

    match (hours, minutes) {
        (0, minutes) => plural(minutes, "minute"),
        (hours, 0) => plural(hours, "hour"),
        (hours, minutes) => format!("{} {}", plural(hours, "hour"), plural(minutes, "minute")),
    }
}

/// Formats a distance given in kilometres to one decimal place.
pub fn format_distance(km: f64) -> String {
    format!("{:.1}km", km.max(0.0))
}

fn plural(count: u64, unit: &str) -> String {
    match count {
        1 => format!("1 {unit}"),
        n => format!("{n} {unit}s"),
    }
}
