use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::services::ServeDir; // frontend assets (HTML/CSS/JS)
use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::{FieldErrorBody, SaveError};
use crate::routes_countdown;
use crate::routes_schedule;
use crate::store::ScheduleStore;
use crate::ticker::{self, TickerHandle};

// Shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: ScheduleStore,
    pub ticker: Arc<TickerHandle>,
}

impl AppState {
    /// Build the state and start the ticker. Must run inside a tokio runtime.
    pub fn new(store: ScheduleStore, clock: Arc<dyn Clock>, period: Duration) -> Self {
        let ticker = ticker::spawn(store.clone(), clock, period);
        Self {
            store,
            ticker: Arc::new(ticker),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldErrorBody>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Rejected(SaveError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

impl From<SaveError> for ApiError {
    fn from(value: SaveError) -> Self {
        ApiError::Rejected(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                    fields: Vec::new(),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Rejected(err) => {
                let body = Json(ErrorBody {
                    error: "invalid_schedule",
                    message: err.to_string(),
                    fields: err.fields().iter().map(FieldErrorBody::from).collect(),
                });
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes_schedule::health))
        // schedule
        .route(
            "/schedule",
            get(routes_schedule::get_schedule).put(routes_schedule::put_schedule),
        )
        .route("/schedule/validate", post(routes_schedule::validate_schedule))
        .route("/schedule/validate/field", post(routes_schedule::validate_field))
        // countdown
        .route("/countdown", get(routes_countdown::get_countdown))
        .route("/countdown/at", get(routes_countdown::get_countdown_at))
        .with_state(state)
}

pub fn router(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .nest("/api", api_router(state))
        .nest_service("/", ServeDir::new(static_dir))
}

pub async fn serve(addr: SocketAddr, state: AppState, static_dir: PathBuf) -> std::io::Result<()> {
    let app = router(state, static_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "server running at http://{addr}");
    info!("API base: http://{addr}/api");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "cannot listen for ctrl-c, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
