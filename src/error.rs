use std::fmt;

/// All errors produced by cadence.
///
/// The lossy decode and formatting paths never return these; they exist
/// for the strict decoder and for callers parsing user-supplied text
/// (frequency keys, HH:MM times).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    Cron { message: String },
}

impl ScheduleError {
    pub fn cron(message: impl Into<String>) -> Self {
        Self::Cron {
            message: message.into(),
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cron { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ScheduleError {}
