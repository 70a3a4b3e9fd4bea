use crate::error::ScheduleError;
use crate::recurrence::{Frequency, Recurrence, TimeOfDay, Weekday};

/// Render a recurrence as a 5-field cron line (minute hour dom month dow).
///
/// Infallible: every representable recurrence has exactly one cron form.
/// Minute and hour are written as given; the editor constrains their range.
pub fn to_cron(rec: &Recurrence) -> String {
    let TimeOfDay { hour, minute } = rec.time;
    match rec.frequency {
        Frequency::EveryDay => format!("{minute} {hour} * * *"),
        Frequency::Weekly(day) => format!("{minute} {hour} * * {}", day.cron_number()),
        Frequency::MonthlyOnFirst => format!("{minute} {hour} 1 * *"),
    }
}

/// Encode an ordered list of recurrences, preserving order.
pub fn encode_all(recurrences: &[Recurrence]) -> Vec<String> {
    recurrences.iter().map(to_cron).collect()
}

/// Parse a cron line into a recurrence, rejecting anything the structured
/// model cannot represent.
pub fn from_cron(cron: &str) -> Result<Recurrence, ScheduleError> {
    let fields: Vec<&str> = cron.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(ScheduleError::cron(format!(
            "expected 5 cron fields, got {}",
            fields.len()
        )));
    }
    let (minute_field, hour_field) = (fields[0], fields[1]);
    let (dom_field, month_field, dow_field) = (fields[2], fields[3], fields[4]);

    if month_field != "*" {
        return Err(ScheduleError::cron(format!(
            "month field must be *, got {month_field}"
        )));
    }

    let frequency = match (dom_field, dow_field) {
        ("*", "*") => Frequency::EveryDay,
        ("*", dow) => Frequency::Weekly(parse_dow(dow)?),
        (dom, "*") => {
            if dom != "1" {
                return Err(ScheduleError::cron(format!(
                    "day-of-month must be 1 or *, got {dom}"
                )));
            }
            Frequency::MonthlyOnFirst
        }
        (dom, dow) => {
            return Err(ScheduleError::cron(format!(
                "cannot constrain both day-of-month ({dom}) and day-of-week ({dow})"
            )));
        }
    };

    let minute = parse_single_value(minute_field, "minute", 59)?;
    let hour = parse_single_value(hour_field, "hour", 23)?;

    Ok(Recurrence {
        frequency,
        time: TimeOfDay { hour, minute },
    })
}

/// Parse a cron line into a recurrence, substituting defaults wherever the
/// strict rules would reject.
///
/// Classification order (first match wins) over `[minute hour dom month dow]`:
///
/// 1. dom, month, dow all `*` -> every day
/// 2. dom, month `*` -> that weekday; anything that is not a single digit
///    0-6 (lists, ranges, names) becomes Monday
/// 3. dow `*` -> monthly on the 1st, whatever day-of-month was written
/// 4. anything else -> every day at 08:00
///
/// Unparseable or out-of-range minute/hour decode as 0. Lines produced by
/// [`to_cron`] always survive this round trip exactly.
pub fn from_cron_lossy(cron: &str) -> Recurrence {
    let fields: Vec<&str> = cron.split_whitespace().collect();
    if fields.len() != 5 {
        return Recurrence::default();
    }
    let (minute, hour) = (fields[0], fields[1]);
    let (dom, month, dow) = (fields[2], fields[3], fields[4]);

    let frequency = if dom == "*" && month == "*" && dow == "*" {
        Frequency::EveryDay
    } else if dom == "*" && month == "*" {
        Frequency::Weekly(parse_dow(dow).unwrap_or(Weekday::Monday))
    } else if dow == "*" {
        Frequency::MonthlyOnFirst
    } else {
        return Recurrence::default();
    };

    Recurrence {
        frequency,
        time: TimeOfDay {
            hour: value_or_zero(hour, 23),
            minute: value_or_zero(minute, 59),
        },
    }
}

/// Decode a persisted schedule collection back into editable recurrences,
/// preserving order. Malformed entries become the default recurrence, never
/// an error.
pub fn decode_all<S: AsRef<str>>(schedule: &[S]) -> Vec<Recurrence> {
    schedule.iter().map(|s| from_cron_lossy(s.as_ref())).collect()
}

/// Parse a DOW field as the single digit 0-6 the encoder emits.
fn parse_dow(field: &str) -> Result<Weekday, ScheduleError> {
    field
        .parse::<u8>()
        .ok()
        .and_then(Weekday::from_cron_number)
        .ok_or_else(|| ScheduleError::cron(format!("day-of-week must be 0-6, got {field}")))
}

/// Parse a single numeric value with validation.
fn parse_single_value(field: &str, name: &str, max: u8) -> Result<u8, ScheduleError> {
    let value: u8 = field
        .parse()
        .map_err(|_| ScheduleError::cron(format!("invalid {name} field: {field}")))?;
    if value > max {
        return Err(ScheduleError::cron(format!(
            "{name} must be 0-{max}, got {value}"
        )));
    }
    Ok(value)
}

fn value_or_zero(field: &str, max: u8) -> u8 {
    field.parse::<u8>().ok().filter(|v| *v <= max).unwrap_or(0)
}
