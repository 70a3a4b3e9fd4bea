//! Human-readable rendering of cron-like schedule lines.
//!
//! Operates purely on text, independent of the structured model: display
//! surfaces must render lines from other producers (or hand-edited ones)
//! that the model cannot represent. Anything unrecognized passes through
//! unchanged; nothing in this module panics or errors.

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Describe a single cron-like line as prose.
///
/// Empty input gives `"No schedule"`. Lines that do not have exactly 5
/// whitespace-separated fields, or whose field combination is not one of
/// the recognized shapes, come back verbatim.
pub fn describe(cron: &str) -> String {
    if cron.trim().is_empty() {
        return "No schedule".to_string();
    }
    let fields: Vec<&str> = cron.split_whitespace().collect();
    if fields.len() != 5 {
        return cron.to_string();
    }
    match describe_fields(fields[0], fields[1], fields[2], fields[3], fields[4]) {
        Some(text) => text,
        None => cron.to_string(),
    }
}

/// Describe a whole schedule collection, preserving input order.
pub fn describe_all<S: AsRef<str>>(schedules: &[S]) -> String {
    match schedules {
        [] => "No schedule".to_string(),
        [only] => describe(only.as_ref()),
        many => {
            let parts: Vec<String> = many.iter().map(|s| describe(s.as_ref())).collect();
            format!("Multiple schedules: {}", parts.join(", "))
        }
    }
}

/// `None` means the line is not renderable as prose and the caller should
/// fall back to the raw text.
fn describe_fields(minute: &str, hour: &str, dom: &str, month: &str, dow: &str) -> Option<String> {
    // Every day at a specific time
    if dom == "*" && month == "*" && dow == "*" {
        if minute == "0" && hour != "*" {
            return Some(format!("Every day at {}", hour_label(hour)?));
        }
        if minute != "*" && hour != "*" {
            return Some(format!("Every day at {}", clock_time(hour, minute)?));
        }
        if minute == "0" {
            return Some("Every hour".to_string());
        }
        return Some(format!("Every {minute} minutes"));
    }

    // Specific days of the week
    if dom == "*" && month == "*" {
        let days = days_of_week(dow)?;
        if minute == "0" && hour != "*" {
            return Some(format!("{days} at {}", hour_label(hour)?));
        }
        if minute != "*" && hour != "*" {
            return Some(format!("{days} at {}", clock_time(hour, minute)?));
        }
        return Some(days);
    }

    // Specific day of the month
    if dow == "*" {
        if minute == "0" && hour != "*" {
            return Some(format!("Day {dom} of every month at {}", hour_label(hour)?));
        }
        if minute != "*" && hour != "*" {
            return Some(format!(
                "Day {dom} of every month at {}",
                clock_time(hour, minute)?
            ));
        }
        return Some(format!("Day {dom} of every month"));
    }

    // Complex combination
    None
}

/// 12-hour label for an on-the-hour time: "12 AM", "9 AM", "12 PM", "5 PM".
fn hour_label(hour: &str) -> Option<String> {
    let h: u32 = hour.parse().ok()?;
    Some(match h {
        0 => "12 AM".to_string(),
        1..=11 => format!("{h} AM"),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", h - 12),
    })
}

/// 12-hour clock with minutes: "12:05 AM", "9:30 AM", "2:15 PM". The minute
/// is always zero-padded to two digits; the hour is not padded.
fn clock_time(hour: &str, minute: &str) -> Option<String> {
    let h: u32 = hour.parse().ok()?;
    let m: u32 = minute.parse().ok()?;
    Some(match h {
        0 => format!("12:{m:02} AM"),
        1..=11 => format!("{h}:{m:02} AM"),
        12 => format!("12:{m:02} PM"),
        _ => format!("{}:{m:02} PM", h - 12),
    })
}

/// Render a day-of-week field: `*`, a single digit, a comma list, or an
/// ascending hyphen range. List entries outside the 0-6 table keep their
/// raw text; a descending range makes the whole line unrenderable.
fn days_of_week(dow: &str) -> Option<String> {
    if dow == "*" {
        return Some("Every day".to_string());
    }
    if dow.contains(',') {
        let names: Vec<String> = dow.split(',').map(|d| day_name(d.trim())).collect();
        return Some(names.join(", "));
    }
    if let Some((start, end)) = dow.split_once('-') {
        let start: usize = start.trim().parse().ok()?;
        let end: usize = end.trim().parse().ok()?;
        if start > end {
            return None;
        }
        let names: Vec<String> = (start..=end).map(|i| day_name(&i.to_string())).collect();
        return Some(names.join(", "));
    }
    Some(day_name(dow))
}

fn day_name(token: &str) -> String {
    token
        .parse::<usize>()
        .ok()
        .and_then(|i| DAY_NAMES.get(i))
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| token.to_string())
}
