/*
Field validation for the schedule form.
Two stages per field: a lexical regex check, then a calendar check through chrono.
Bad input is always reported as a value, and every field is checked even after one fails.
*/

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::{FieldError, ValidationError};
use crate::models::{Field, ScheduleConfig};

pub const DATE_FORMAT: &str = "YYYY-MM-DD";
pub const TIME_FORMAT: &str = "HH:MM";

// ASCII digits only.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("invalid date pattern")
});

// Hour may drop its leading zero ("8:30"), minute may not.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("invalid time pattern")
});

// A schedule whose four fields all parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSchedule {
    pub year_start: NaiveDate,
    pub year_end: NaiveDate,
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
}

pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    let caps = DATE_RE.captures(text).ok_or(ValidationError::Format {
        expected: DATE_FORMAT,
    })?;

    let calendar = || ValidationError::Calendar(text.to_string());
    let y: i32 = caps[1].parse().map_err(|_| calendar())?;
    let m: u32 = caps[2].parse().map_err(|_| calendar())?;
    let d: u32 = caps[3].parse().map_err(|_| calendar())?;

    // from_ymd_opt rejects month 0/13+ and days past the end of the month
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(calendar)
}

pub fn parse_time(text: &str) -> Result<NaiveTime, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    let format = ValidationError::Format {
        expected: TIME_FORMAT,
    };
    let caps = TIME_RE.captures(text).ok_or(format.clone())?;

    let h: u32 = caps[1].parse().map_err(|_| format.clone())?;
    let m: u32 = caps[2].parse().map_err(|_| format.clone())?;
    NaiveTime::from_hms_opt(h, m, 0).ok_or(format)
}

pub fn validate_date(text: &str) -> bool {
    parse_date(text).is_ok()
}

pub fn validate_time(text: &str) -> bool {
    parse_time(text).is_ok()
}

pub fn validate_field(field: Field, text: &str) -> Result<(), ValidationError> {
    if field.is_date() {
        parse_date(text).map(|_| ())
    } else {
        parse_time(text).map(|_| ())
    }
}

/// Validate all four fields and their ordering.
///
/// Rules:
/// - every field must pass its own format/calendar check
/// - yearEnd may equal yearStart but not precede it
/// - dayEnd must be strictly after dayStart
///
/// All failures are collected; ordering is only checked once both sides parse.
pub fn validate_schedule(config: &ScheduleConfig) -> Result<ValidSchedule, Vec<FieldError>> {
    let mut errors = Vec::new();

    let mut date = |field: Field| match parse_date(config.get(field)) {
        Ok(d) => Some(d),
        Err(e) => {
            errors.push(FieldError::new(field, e));
            None
        }
    };
    let year_start = date(Field::YearStart);
    let year_end = date(Field::YearEnd);

    let mut time = |field: Field| match parse_time(config.get(field)) {
        Ok(t) => Some(t),
        Err(e) => {
            errors.push(FieldError::new(field, e));
            None
        }
    };
    let day_start = time(Field::DayStart);
    let day_end = time(Field::DayEnd);

    if let (Some(start), Some(end)) = (year_start, year_end) {
        if end < start {
            errors.push(FieldError::new(
                Field::YearEnd,
                ValidationError::OutOfOrder {
                    other: Field::YearStart,
                },
            ));
        }
    }
    if let (Some(start), Some(end)) = (day_start, day_end) {
        if end <= start {
            errors.push(FieldError::new(
                Field::DayEnd,
                ValidationError::OutOfOrder {
                    other: Field::DayStart,
                },
            ));
        }
    }

    match (year_start, year_end, day_start, day_end) {
        (Some(year_start), Some(year_end), Some(day_start), Some(day_end))
            if errors.is_empty() =>
        {
            Ok(ValidSchedule {
                year_start,
                year_end,
                day_start,
                day_end,
            })
        }
        _ => Err(errors),
    }
}
