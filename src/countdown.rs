/*
Countdown computation.
Pure function of (schedule, now). The ticker and the HTTP handlers supply "now".
*/

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::models::{CountdownSnapshot, DayPhase, Hms, ScheduleConfig, YearPhase};
use crate::validate::{parse_date, parse_time};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

// Anchor a calendar date + time-of-day to now's offset.
fn at_offset(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&date.and_time(time)).single()
}

// ceil(ms / 1 day), correct for negative spans too
fn ceil_days(ms: i64) -> i64 {
    let q = ms.div_euclid(DAY_MS);
    if ms.rem_euclid(DAY_MS) == 0 { q } else { q + 1 }
}

/// Compute the countdown for `config` at instant `now`.
///
/// Process:
/// - any field that fails its own validator -> not-configured snapshot
/// - day boundaries are today's date (in now's offset) plus dayStart/dayEnd
/// - phase: now < start -> BeforeStart, now <= end -> InSession, else AfterEnd
/// - year dates count from local midnight; progress is clamped to 0..=1
///   and is 1 once the year has ended
pub fn compute_snapshot(
    config: &ScheduleConfig,
    now: DateTime<FixedOffset>,
) -> CountdownSnapshot {
    let (Ok(year_start), Ok(year_end), Ok(day_start), Ok(day_end)) = (
        parse_date(&config.year_start),
        parse_date(&config.year_end),
        parse_time(&config.day_start),
        parse_time(&config.day_end),
    ) else {
        return CountdownSnapshot::not_configured();
    };

    let offset = *now.offset();
    let today = now.date_naive();

    let (Some(day_start_dt), Some(day_end_dt), Some(year_start_dt), Some(year_end_dt)) = (
        at_offset(today, day_start, offset),
        at_offset(today, day_end, offset),
        at_offset(year_start, NaiveTime::MIN, offset),
        at_offset(year_end, NaiveTime::MIN, offset),
    ) else {
        return CountdownSnapshot::not_configured();
    };

    // day
    let day_phase = if now < day_start_dt {
        DayPhase::BeforeStart
    } else if now <= day_end_dt {
        DayPhase::InSession
    } else {
        DayPhase::AfterEnd
    };

    let time_to_start = (day_phase == DayPhase::BeforeStart)
        .then(|| Hms::from_millis((day_start_dt - now).num_milliseconds()));
    let time_to_end =
        (now <= day_end_dt).then(|| Hms::from_millis((day_end_dt - now).num_milliseconds()));

    // year
    let total_days = ceil_days((year_end_dt - year_start_dt).num_milliseconds());
    let remaining_days = ceil_days((year_end_dt - now).num_milliseconds()).max(0);

    let year_phase = if now < year_start_dt {
        YearPhase::NotStarted
    } else if now >= year_end_dt {
        YearPhase::Ended
    } else {
        YearPhase::InProgress
    };

    // A zero-length year (start == end) is over as soon as it begins.
    let progress = match year_phase {
        YearPhase::Ended => 1.0,
        _ if total_days > 0 => {
            ((total_days - remaining_days) as f64 / total_days as f64).clamp(0.0, 1.0)
        }
        _ => 0.0,
    };

    CountdownSnapshot {
        configured: true,
        day_phase: Some(day_phase),
        time_to_start,
        time_to_end,
        year_phase: Some(year_phase),
        year_total_days: Some(total_days),
        year_days_remaining: Some(remaining_days),
        year_progress: Some(progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_days_rounds_up() {
        assert_eq!(ceil_days(0), 0);
        assert_eq!(ceil_days(1), 1);
        assert_eq!(ceil_days(DAY_MS), 1);
        assert_eq!(ceil_days(DAY_MS + 1), 2);
        assert_eq!(ceil_days(-1), 0);
        assert_eq!(ceil_days(-DAY_MS - 1), -1);
    }

    #[test]
    fn at_offset_keeps_wall_time() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let dt = at_offset(date, time, offset).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-09-02T08:00:00+09:00");
    }
}
