pub mod errors;

use chrono::{Local, LocalResult, NaiveDate, TimeZone, Utc};
use clap::Parser;
use std::env;

use crate::domain::TargetInstant;
pub use errors::ConfigError;

/* =======================
ENV VARIABLE NAMES
======================= */

pub const YEAR_VAR: &str = "year";
pub const MONTH_VAR: &str = "month";
pub const DAY_VAR: &str = "day";
pub const HOUR_VAR: &str = "hour";
pub const MINUTE_VAR: &str = "minute";

/* =======================
CLI ARGS (PREVIEW BINARY)
======================= */

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the countdown page once and print it")]
pub struct Args {
    /// Pretend the current time is this RFC 3339 instant
    #[arg(long)]
    pub now: Option<String>,

    /// Print only the HTML body instead of the whole response envelope
    #[arg(long)]
    pub body: bool,
}

/* =======================
TARGET CONFIG
======================= */

/// Wall-clock target date, interpreted in the process-local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetConfig {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl TargetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`TargetConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            year: required(&lookup, YEAR_VAR)?,
            month: required(&lookup, MONTH_VAR)?,
            day: required(&lookup, DAY_VAR)?,
            hour: optional(&lookup, HOUR_VAR)?.unwrap_or(0),
            minute: optional(&lookup, MINUTE_VAR)?.unwrap_or(0),
        })
    }

    /// Resolves against the local zone (`TZ` on Lambda).
    pub fn target(&self) -> Result<TargetInstant, ConfigError> {
        self.target_in(&Local)
    }

    pub fn target_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<TargetInstant, ConfigError> {
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .ok_or(ConfigError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
                hour: self.hour,
                minute: self.minute,
            })?;

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(at) => Ok(TargetInstant::new(at.with_timezone(&Utc))),
            LocalResult::Ambiguous(_, _) => Err(ConfigError::AmbiguousLocalTime(naive)),
            LocalResult::None => Err(ConfigError::NonexistentLocalTime(naive)),
        }
    }
}

fn required<T, F>(lookup: &F, key: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key)?.ok_or(ConfigError::Missing(key))
}

fn optional<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
