// Text shown on the timer screen for a snapshot.

use serde::Serialize;

use crate::models::{CountdownSnapshot, DayPhase};

pub const NOT_CONFIGURED: &str = "Not configured";
pub const DAY_ENDED: &str = "School day has ended";
pub const IN_SESSION: &str = "In session";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountdownText {
    pub until_start: String,
    pub until_end: String,
    pub year: String,
}

pub fn render_start_countdown(snapshot: &CountdownSnapshot) -> String {
    match (snapshot.day_phase, snapshot.time_to_start) {
        (Some(DayPhase::BeforeStart), Some(hms)) => hms.to_string(),
        (Some(DayPhase::InSession), _) => IN_SESSION.to_string(),
        (Some(DayPhase::AfterEnd), _) => DAY_ENDED.to_string(),
        _ => NOT_CONFIGURED.to_string(),
    }
}

pub fn render_day_countdown(snapshot: &CountdownSnapshot) -> String {
    match (snapshot.day_phase, snapshot.time_to_end) {
        (Some(DayPhase::AfterEnd), _) => DAY_ENDED.to_string(),
        (Some(_), Some(hms)) => hms.to_string(),
        _ => NOT_CONFIGURED.to_string(),
    }
}

pub fn render_year_countdown(snapshot: &CountdownSnapshot) -> String {
    match snapshot.year_days_remaining {
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{days} days"),
        None => NOT_CONFIGURED.to_string(),
    }
}

pub fn render(snapshot: &CountdownSnapshot) -> CountdownText {
    CountdownText {
        until_start: render_start_countdown(snapshot),
        until_end: render_day_countdown(snapshot),
        year: render_year_countdown(snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hms;

    fn snapshot(phase: DayPhase, to_start: Option<Hms>, to_end: Option<Hms>) -> CountdownSnapshot {
        CountdownSnapshot {
            configured: true,
            day_phase: Some(phase),
            time_to_start: to_start,
            time_to_end: to_end,
            year_days_remaining: Some(42),
            ..CountdownSnapshot::default()
        }
    }

    #[test]
    fn before_start() {
        let s = snapshot(
            DayPhase::BeforeStart,
            Some(Hms::new(1, 0, 0)),
            Some(Hms::new(8, 0, 0)),
        );
        let text = render(&s);
        assert_eq!(text.until_start, "1h 0m 0s");
        assert_eq!(text.until_end, "8h 0m 0s");
        assert_eq!(text.year, "42 days");
    }

    #[test]
    fn in_session() {
        let s = snapshot(DayPhase::InSession, None, Some(Hms::new(0, 30, 5)));
        assert_eq!(render_start_countdown(&s), IN_SESSION);
        assert_eq!(render_day_countdown(&s), "0h 30m 5s");
    }

    #[test]
    fn after_end() {
        let s = snapshot(DayPhase::AfterEnd, None, None);
        assert_eq!(render_start_countdown(&s), DAY_ENDED);
        assert_eq!(render_day_countdown(&s), DAY_ENDED);
    }

    #[test]
    fn not_configured() {
        let text = render(&CountdownSnapshot::not_configured());
        assert_eq!(text.until_start, NOT_CONFIGURED);
        assert_eq!(text.until_end, NOT_CONFIGURED);
        assert_eq!(text.year, NOT_CONFIGURED);
    }

    #[test]
    fn single_day_left() {
        let mut s = snapshot(DayPhase::InSession, None, None);
        s.year_days_remaining = Some(1);
        assert_eq!(render_year_countdown(&s), "1 day");
    }
}
