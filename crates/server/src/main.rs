// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use notice_planner_api::{
    ApiError, CalculateRequest, CalculateResponse, CalendarViewRequest, CalendarViewResponse,
    HolidaySourceResponse, calculate, calendar_view, holiday_source, load_holiday_file,
};
use notice_planner_domain::{BusinessCalendar, HolidaySet};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Notice Planner Server - HTTP server for resignation timing and annual leave planning
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// JSON holiday file to use instead of the built-in Hong Kong table
    #[arg(long, value_name = "FILE")]
    holidays: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// The calendar is immutable once loaded, so handlers share it without locking.
#[derive(Clone)]
struct AppState {
    /// The business calendar every calculation is evaluated against.
    calendar: Arc<BusinessCalendar>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is answering.
    status: String,
    /// The jurisdiction of the loaded holiday table.
    country: String,
    /// Number of holidays loaded.
    holiday_count: usize,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for POST `/calculate` endpoint.
///
/// Computes every resignation scenario for the submitted form values.
async fn handle_calculate(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, HttpError> {
    info!(
        resignation_date = %req.resignation_date,
        notice_period = %req.notice_period,
        unit = %req.notice_period_unit,
        "Handling calculate request"
    );

    let response: CalculateResponse = calculate(&app_state.calendar, &req).inspect_err(|e| {
        warn!(error = %e, "Calculate request rejected");
    })?;

    Ok(Json(response))
}

/// Handler for POST `/calendar` endpoint.
///
/// Builds the month grid of one scenario.
async fn handle_calendar_view(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CalendarViewRequest>,
) -> Result<Json<CalendarViewResponse>, HttpError> {
    info!(
        resignation_date = %req.inputs.resignation_date,
        scenario_index = req.scenario_index,
        "Handling calendar view request"
    );

    let response: CalendarViewResponse =
        calendar_view(&app_state.calendar, &req.inputs, req.scenario_index).inspect_err(|e| {
            warn!(error = %e, "Calendar view request rejected");
        })?;

    Ok(Json(response))
}

/// Handler for GET `/holidays` endpoint.
async fn handle_holidays(
    AxumState(app_state): AxumState<AppState>,
) -> Json<HolidaySourceResponse> {
    info!("Handling holidays request");
    Json(holiday_source(&app_state.calendar))
}

/// Handler for GET `/health` endpoint.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    let holidays: &HolidaySet = app_state.calendar.holidays();
    Json(HealthResponse {
        status: String::from("ok"),
        country: holidays.source().country.clone(),
        holiday_count: holidays.len(),
    })
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(handle_calculate))
        .route("/calendar", post(handle_calendar_view))
        .route("/holidays", get(handle_holidays))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Notice Planner Server");

    let holidays: HolidaySet = if let Some(path) = &args.holidays {
        info!("Loading holidays from: {}", path.display());
        load_holiday_file(path)?
    } else {
        info!("Using built-in Hong Kong holidays");
        HolidaySet::hong_kong()
    };

    let app_state: AppState = AppState {
        calendar: Arc::new(BusinessCalendar::new(holidays)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
