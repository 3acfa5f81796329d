//! Display formatting helpers

use chrono::{Local, TimeZone};

/// Format a duration in milliseconds: `"250ms"` below one second, `"2.5s"` above.
///
/// Exact halfway values round up (`1250` -> `"1.3s"`).
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        return format!("{}ms", ms);
    }
    // x.25 and x.75 are exact in binary; `{:.1}` rounds those ties to even
    if matches!(ms % 1000, 250 | 750) {
        let tenths = (ms + 50) / 100;
        return format!("{}.{}s", tenths / 10, tenths % 10);
    }
    format!("{:.1}s", ms as f64 / 1000.0)
}

/// Format a unix-millisecond timestamp as local date and time
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Format an integer with thousands separators (`12345` -> `"12,345"`)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
