//! cadence — helper schedule encoding and formatting.
//!
//! Converts between a structured recurrence model (frequency + time of day)
//! and the 5-field cron-like lines that helper configurations persist and
//! send over the wire, and renders those lines as human-readable prose.
//!
//! # Examples
//!
//! ```
//! use cadence::{Frequency, Recurrence, TimeOfDay, Weekday};
//!
//! let rec = Recurrence::new(Frequency::Weekly(Weekday::Wednesday), TimeOfDay::new(9, 0));
//! assert_eq!(rec.to_cron(), "0 9 * * 3");
//! assert_eq!(cadence::describe("0 9 * * 3"), "Wednesday at 9 AM");
//! ```

pub mod cron;
pub mod error;
pub mod humanize;
pub mod recurrence;

pub use error::ScheduleError;
pub use humanize::{describe, describe_all};
pub use recurrence::{Frequency, Recurrence, TimeOfDay, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// --- Recurrence convenience methods ---

impl Recurrence {
    /// Render as a canonical 5-field cron line.
    pub fn to_cron(&self) -> String {
        cron::to_cron(self)
    }

    /// Strictly parse a cron line; rejects shapes the model cannot represent.
    pub fn from_cron(line: &str) -> Result<Self, ScheduleError> {
        cron::from_cron(line)
    }

    /// Best-effort parse: unrepresentable or malformed lines decode to
    /// documented defaults instead of failing.
    pub fn from_cron_lossy(line: &str) -> Self {
        cron::from_cron_lossy(line)
    }

    /// Human-readable description of this recurrence.
    pub fn describe(&self) -> String {
        humanize::describe(&self.to_cron())
    }
}

impl FromStr for Recurrence {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cron(s)
    }
}

// The wire format owned by this crate is a JSON array of cron lines, so a
// recurrence serializes as its line and a `Vec<Recurrence>` round-trips
// through the helper configuration payload unchanged.
#[cfg(feature = "serde")]
impl Serialize for Recurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_cron())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Recurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Recurrence::from_cron(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serialize_as_cron_line() {
        let rec = Recurrence::new(Frequency::EveryDay, TimeOfDay::new(8, 0));
        assert_eq!(serde_json::to_string(&rec).unwrap(), "\"0 8 * * *\"");
    }

    #[test]
    fn test_wire_array_roundtrip() {
        let list = vec![
            Recurrence::new(Frequency::EveryDay, TimeOfDay::new(8, 0)),
            Recurrence::new(Frequency::Weekly(Weekday::Friday), TimeOfDay::new(17, 30)),
            Recurrence::new(Frequency::MonthlyOnFirst, TimeOfDay::new(0, 0)),
        ];
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["0 8 * * *","30 17 * * 5","0 0 1 * *"]"#);
        let back: Vec<Recurrence> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Recurrence>("\"garbage\"").is_err());
        assert!(serde_json::from_str::<Recurrence>("\"0 9 * * 1-5\"").is_err());
    }
}
