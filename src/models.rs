use std::fmt;

use serde::{Deserialize, Serialize};

// The four raw fields exactly as the user typed them.
// Empty strings mean "not set yet".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    pub year_start: String, // "YYYY-MM-DD"
    pub year_end: String,   // "YYYY-MM-DD"
    pub day_start: String,  // "HH:MM"
    pub day_end: String,    // "HH:MM"
}

impl ScheduleConfig {
    pub fn new(
        year_start: impl Into<String>,
        year_end: impl Into<String>,
        day_start: impl Into<String>,
        day_end: impl Into<String>,
    ) -> Self {
        Self {
            year_start: year_start.into(),
            year_end: year_end.into(),
            day_start: day_start.into(),
            day_end: day_end.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::YearStart => &self.year_start,
            Field::YearEnd => &self.year_end,
            Field::DayStart => &self.day_start,
            Field::DayEnd => &self.day_end,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    YearStart,
    YearEnd,
    DayStart,
    DayEnd,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::YearStart => "yearStart",
            Field::YearEnd => "yearEnd",
            Field::DayStart => "dayStart",
            Field::DayEnd => "dayEnd",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, Field::YearStart | Field::YearEnd)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Where "now" sits relative to today's school-day boundaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayPhase {
    BeforeStart,
    InSession,
    AfterEnd,
}

// Where "now" sits relative to the school year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum YearPhase {
    NotStarted,
    InProgress,
    Ended,
}

/// A non-negative duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hms {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Hms {
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self { hours, minutes, seconds }
    }

    // Floor at every level; negative input collapses to zero.
    pub fn from_millis(millis: i64) -> Self {
        let total_secs = millis.max(0) / 1000;
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs % 3600) / 60,
            seconds: total_secs % 60,
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Result of one countdown computation.
///
/// Every field is `None` when the schedule is not fully configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CountdownSnapshot {
    pub configured: bool,
    pub day_phase: Option<DayPhase>,
    pub time_to_start: Option<Hms>, // only while BeforeStart
    pub time_to_end: Option<Hms>,   // until dayEnd has passed
    pub year_phase: Option<YearPhase>,
    pub year_total_days: Option<i64>,
    pub year_days_remaining: Option<i64>,
    pub year_progress: Option<f64>, // 0.0..=1.0
}

impl CountdownSnapshot {
    pub fn not_configured() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }
}
