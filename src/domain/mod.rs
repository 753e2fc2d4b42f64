pub mod time;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use time::{compute, format_time};

// ==================================================
// TARGET
// ==================================================

/// The instant the countdown is measured against. Built once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInstant(DateTime<Utc>);

impl TargetInstant {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }
}

// ==================================================
// BREAKDOWN
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub has_passed: bool,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    /// Absolute distance to the target in whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub fn phrasing(&self) -> Phrasing {
        select_phrasing(self.has_passed)
    }
}

// ==================================================
// UNITS + PLURALS
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Day, Unit::Hour, Unit::Minute, Unit::Second];

    /// Singular only for exactly one; zero reads "0 days".
    pub fn pluralize(self, n: u64) -> &'static str {
        match (self, n == 1) {
            (Unit::Day, true) => "day",
            (Unit::Day, false) => "days",
            (Unit::Hour, true) => "hour",
            (Unit::Hour, false) => "hours",
            (Unit::Minute, true) => "minute",
            (Unit::Minute, false) => "minutes",
            (Unit::Second, true) => "second",
            (Unit::Second, false) => "seconds",
        }
    }

    pub fn value_in(self, b: &Breakdown) -> u64 {
        match self {
            Unit::Day => b.days,
            Unit::Hour => b.hours,
            Unit::Minute => b.minutes,
            Unit::Second => b.seconds,
        }
    }
}

// ==================================================
// PHRASING
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phrasing {
    pub header: &'static str,
    pub footer: &'static str,
}

const UPCOMING: Phrasing = Phrasing {
    header: "Time till bliss:",
    footer: "Time until my plane lands!",
};

const PASSED: Phrasing = Phrasing {
    header: "Time since bliss:",
    footer: "Time since my plane landed!",
};

pub fn select_phrasing(has_passed: bool) -> Phrasing {
    if has_passed {
        PASSED
    } else {
        UPCOMING
    }
}

// ==================================================
// PAGE (TEMPLATE INPUT)
// ==================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub header: String,
    pub time: String,
    pub footer: String,
}

impl From<&Breakdown> for Page {
    fn from(b: &Breakdown) -> Self {
        let phrasing = b.phrasing();
        Self {
            header: phrasing.header.to_string(),
            time: format_time(b),
            footer: phrasing.footer.to_string(),
        }
    }
}
