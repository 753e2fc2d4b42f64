use chrono::NaiveDateTime;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
    AmbiguousLocalTime(NaiveDateTime),
    NonexistentLocalTime(NaiveDateTime),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "Missing environment variable `{}`", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "Environment variable `{}` is not a valid integer: {:?}", key, value)
            }
            ConfigError::InvalidDate {
                year,
                month,
                day,
                hour,
                minute,
            } => write!(
                f,
                "Not a valid date/time: {:04}-{:02}-{:02} {:02}:{:02}",
                year, month, day, hour, minute
            ),
            ConfigError::AmbiguousLocalTime(at) => {
                write!(f, "Local time {} is ambiguous in this time zone", at)
            }
            ConfigError::NonexistentLocalTime(at) => {
                write!(f, "Local time {} does not exist in this time zone", at)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
