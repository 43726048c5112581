// --------------------------------------------------
// Handles API endpoints for the schedule form.
//
// Responsibilities:
// - Read the current schedule
// - Validated save (all four fields or nothing)
// - Per-field validation without saving
// - Single-field validation while the user types
// --------------------------------------------------

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::app::{ApiError, AppState};
use crate::models::{Field, ScheduleConfig};
use crate::validate;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMessages {
    pub year_start: Option<String>,
    pub year_end: Option<String>,
    pub day_start: Option<String>,
    pub day_end: Option<String>,
}

impl FieldMessages {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::YearStart => &mut self.year_start,
            Field::YearEnd => &mut self.year_end,
            Field::DayStart => &mut self.day_start,
            Field::DayEnd => &mut self.day_end,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub fields: FieldMessages,
}

#[derive(Debug, Deserialize)]
pub struct FieldInput {
    pub field: Field,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct FieldResult {
    pub field: Field,
    pub valid: bool,
    pub message: Option<String>,
}

// -----------------------------
// GET /api/health
// Also reports whether a full schedule has been saved
// -----------------------------
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "configured": state.store.is_configured() }))
}

// -----------------------------
// GET /api/schedule
// Returns the schedule exactly as last saved (empty strings if never saved)
// -----------------------------
pub async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleConfig> {
    Json(state.store.current())
}

// -----------------------------
// PUT /api/schedule
// Validates all four fields; saves only if every one passes
// -----------------------------
pub async fn put_schedule(
    State(state): State<AppState>,
    Json(input): Json<ScheduleConfig>,
) -> Result<Json<ScheduleConfig>, ApiError> {
    let saved = state.store.save(input)?;
    Ok(Json(saved))
}

// -----------------------------
// POST /api/schedule/validate
// Reports a message per bad field; never touches the store
// -----------------------------
pub async fn validate_schedule(Json(input): Json<ScheduleConfig>) -> Json<ValidateResponse> {
    let mut fields = FieldMessages::default();

    let valid = match validate::validate_schedule(&input) {
        Ok(_) => true,
        Err(errors) => {
            for e in errors {
                // first complaint per field wins
                fields.slot(e.field).get_or_insert_with(|| e.error.to_string());
            }
            false
        }
    };

    Json(ValidateResponse { valid, fields })
}

// -----------------------------
// POST /api/schedule/validate/field
// Format/calendar check for one field; ordering needs the whole form
// -----------------------------
pub async fn validate_field(Json(input): Json<FieldInput>) -> Json<FieldResult> {
    let message = validate::validate_field(input.field, &input.value)
        .err()
        .map(|e| e.to_string());

    Json(FieldResult {
        field: input.field,
        valid: message.is_none(),
        message,
    })
}
