// Define data modules
pub mod models;     // Data structures (ScheduleConfig, CountdownSnapshot, etc.)
pub mod error;      // Validation / save errors
pub mod validate;   // Date and time field checks
pub mod store;      // In-memory schedule store
pub mod clock;      // Source of "now"
pub mod countdown;  // Day phase and year progress computation
pub mod render;     // Display strings for a snapshot
pub mod ticker;     // Once-a-second recompute loop
pub mod app;        // Router, shared state, API errors
pub mod routes_schedule;    // HTTP handlers for the schedule form
pub mod routes_countdown;   // HTTP handlers for the countdown view
pub mod config;     // CLI flags / env vars
pub mod logging;    // tracing setup

pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::compute_snapshot;
pub use error::{FieldError, SaveError, ValidationError};
pub use models::{CountdownSnapshot, DayPhase, Field, Hms, ScheduleConfig, YearPhase};
pub use store::ScheduleStore;
pub use validate::{validate_date, validate_time};
