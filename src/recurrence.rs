use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Day of the week, numbered the way cron numbers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Lowercase key used by the editor UI and the CLI (`monday` .. `sunday`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Cron day-of-week code: 0=Sunday, 1=Monday, ..., 6=Saturday.
    pub fn cron_number(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    pub fn from_cron_number(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }
}

pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "sunday" | "sun" => Some(Weekday::Sunday),
        "monday" | "mon" => Some(Weekday::Monday),
        "tuesday" | "tue" => Some(Weekday::Tuesday),
        "wednesday" | "wed" => Some(Weekday::Wednesday),
        "thursday" | "thu" => Some(Weekday::Thursday),
        "friday" | "fri" => Some(Weekday::Friday),
        "saturday" | "sat" => Some(Weekday::Saturday),
        _ => None,
    }
}

/// How often a recurrence fires.
///
/// The wire format can carry shapes this type cannot represent (lists,
/// ranges, step values); those are handled at the decode boundary, never
/// here. The encoder only ever produces the three shapes below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// Every day at the given time.
    EveryDay,
    /// One fixed day of the week.
    Weekly(Weekday),
    /// The 1st of every month.
    MonthlyOnFirst,
}

impl Frequency {
    /// Key used by the editor UI: `day`, `monday` .. `sunday`, `month`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EveryDay => "day",
            Self::Weekly(day) => day.as_str(),
            Self::MonthlyOnFirst => "month",
        }
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::EveryDay),
            "month" => Ok(Self::MonthlyOnFirst),
            other => parse_weekday(other)
                .map(Self::Weekly)
                .ok_or_else(|| ScheduleError::cron(format!("unknown frequency: {s}"))),
        }
    }
}

/// Time of day (hours and minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ScheduleError::cron(format!("expected HH:MM, got {s}")))?;
        let hour: u8 = h
            .parse()
            .map_err(|_| ScheduleError::cron(format!("invalid hour: {h}")))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| ScheduleError::cron(format!("invalid minute: {m}")))?;
        if hour > 23 {
            return Err(ScheduleError::cron(format!("hour must be 0-23, got {hour}")));
        }
        if minute > 59 {
            return Err(ScheduleError::cron(format!(
                "minute must be 0-59, got {minute}"
            )));
        }
        Ok(Self { hour, minute })
    }
}

/// One editable schedule rule: a frequency plus a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    pub frequency: Frequency,
    pub time: TimeOfDay,
}

impl Recurrence {
    pub fn new(frequency: Frequency, time: TimeOfDay) -> Self {
        Self { frequency, time }
    }
}

/// The substitute for schedule lines that cannot be decoded: every day
/// at 08:00.
impl Default for Recurrence {
    fn default() -> Self {
        Self {
            frequency: Frequency::EveryDay,
            time: TimeOfDay { hour: 8, minute: 0 },
        }
    }
}

impl fmt::Display for Recurrence {
    /// The canonical textual form is the cron line itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::cron::to_cron(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_cron_numbers_roundtrip() {
        for n in 0..=6u8 {
            let day = Weekday::from_cron_number(n).unwrap();
            assert_eq!(day.cron_number(), n);
        }
        assert_eq!(Weekday::from_cron_number(7), None);
    }

    #[test]
    fn test_frequency_keys() {
        assert_eq!("day".parse::<Frequency>().unwrap(), Frequency::EveryDay);
        assert_eq!(
            "wednesday".parse::<Frequency>().unwrap(),
            Frequency::Weekly(Weekday::Wednesday)
        );
        assert_eq!(
            "month".parse::<Frequency>().unwrap(),
            Frequency::MonthlyOnFirst
        );
        assert!("fortnight".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_time_of_day_display() {
        assert_eq!(TimeOfDay::new(8, 0).to_string(), "08:00");
        assert_eq!(TimeOfDay::new(23, 5).to_string(), "23:05");
    }

    #[test]
    fn test_time_of_day_parse() {
        assert_eq!("09:30".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(9, 30));
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("09:60".parse::<TimeOfDay>().is_err());
        assert!("930".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_default_recurrence() {
        let rec = Recurrence::default();
        assert_eq!(rec.frequency, Frequency::EveryDay);
        assert_eq!(rec.time, TimeOfDay::new(8, 0));
    }
}
