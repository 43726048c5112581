use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::app::{ApiError, AppState};
use crate::countdown;
use crate::models::CountdownSnapshot;
use crate::render::{self, CountdownText};
use crate::ticker::Tick;

#[derive(Debug, Deserialize)]
pub struct AtQuery {
    pub now: Option<String>, // RFC3339
}

#[derive(Debug, Serialize)]
pub struct CountdownResponse {
    pub now: String,
    pub snapshot: CountdownSnapshot,
    pub text: CountdownText,
}

impl CountdownResponse {
    fn new(now: DateTime<FixedOffset>, snapshot: CountdownSnapshot) -> Self {
        let text = render::render(&snapshot);
        Self {
            now: now.to_rfc3339(),
            snapshot,
            text,
        }
    }
}

impl From<Tick> for CountdownResponse {
    fn from(tick: Tick) -> Self {
        Self::new(tick.at, tick.snapshot)
    }
}

// GET /api/countdown
// Latest snapshot published by the ticker.
pub async fn get_countdown(State(state): State<AppState>) -> Json<CountdownResponse> {
    Json(state.ticker.latest().into())
}

// GET /api/countdown/at?now=2024-09-02T07:00:00+02:00
// Same computation against the current schedule, for an arbitrary instant.
pub async fn get_countdown_at(
    State(state): State<AppState>,
    Query(q): Query<AtQuery>,
) -> Result<Json<CountdownResponse>, ApiError> {
    let raw = q
        .now
        .ok_or_else(|| ApiError::bad_request("missing query parameter: now"))?;
    let now = DateTime::parse_from_rfc3339(&raw)
        .map_err(|e| ApiError::bad_request(format!("invalid now: {e}")))?;

    let snapshot = countdown::compute_snapshot(&state.store.current(), now);
    Ok(Json(CountdownResponse::new(now, snapshot)))
}
