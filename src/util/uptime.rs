const SECS_PER_YEAR: u64 = 365 * 24 * 60 * 60;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Formats an uptime such as `1y 2d 03h 04m 05s`.
///
/// Year and day parts are omitted while zero; hours, minutes, and seconds are always
/// shown zero-padded.
pub fn format_uptime(total_secs: u64) -> String {
    let years = total_secs / SECS_PER_YEAR;
    let rem = total_secs % SECS_PER_YEAR;
    let days = rem / SECS_PER_DAY;
    let rem = rem % SECS_PER_DAY;
    let hours = rem / 3600;
    let minutes = (rem % 3600) / 60;
    let seconds = rem % 60;

    let mut parts = Vec::with_capacity(3);
    if years > 0 {
        parts.push(format!("{}y", years));
    }
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    parts.push(format!("{:02}h {:02}m {:02}s", hours, minutes, seconds));

    parts.join(" ")
}
