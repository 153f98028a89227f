//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::catalog::CatalogError;
use crate::domain::Trip;
use crate::search::{SearchError, TripSource};
use crate::store::{StoreError, TripRepository};

use super::dto::*;
use super::state::AppState;
use super::validate::{validate_create, validate_search};

/// Create the application router.
///
/// Trip endpoints live under `/api`; `/health` sits at the root.
pub fn create_router<S, R>(state: AppState<S, R>) -> Router
where
    S: TripSource + 'static,
    R: TripRepository + 'static,
{
    let api = Router::new()
        .route("/trips/search", get(search_trips::<S, R>))
        .route("/trips", get(list_trips::<S, R>).post(create_trip::<S, R>))
        .route("/trips/:id", delete(delete_trip::<S, R>));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search provider trips and sort them.
async fn search_trips<S, R>(
    State(state): State<AppState<S, R>>,
    query: Result<Query<SearchTripsQuery>, QueryRejection>,
) -> Result<Json<Vec<Trip>>, AppError>
where
    S: TripSource + 'static,
    R: TripRepository + 'static,
{
    // Take the rejection so malformed query strings get our error body
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: format!("Invalid query: {}", e.body_text()),
        violations: Vec::new(),
    })?;
    let params = validate_search(&query).map_err(AppError::validation)?;
    let trips = state.search.execute(&params).await?;
    Ok(Json(trips))
}

/// Save a trip.
async fn create_trip<S, R>(
    State(state): State<AppState<S, R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Trip>), AppError>
where
    S: TripSource + 'static,
    R: TripRepository + 'static,
{
    // Parse JSON manually so the rejection uses our error body
    let req: CreateTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid trip JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
            violations: Vec::new(),
        }
    })?;

    let trip = validate_create(req).map_err(AppError::validation)?;
    let saved = state.catalog.save(&trip).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// List saved trips.
async fn list_trips<S, R>(State(state): State<AppState<S, R>>) -> Result<Json<Vec<Trip>>, AppError>
where
    S: TripSource + 'static,
    R: TripRepository + 'static,
{
    Ok(Json(state.catalog.list().await?))
}

/// Delete a saved trip by storage id.
async fn delete_trip<S, R>(
    State(state): State<AppState<S, R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError>
where
    S: TripSource + 'static,
    R: TripRepository + 'static,
{
    state.catalog.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
        violations: Vec<String>,
    },
    NotFound {
        message: String,
    },
    Conflict {
        message: String,
    },
    BadGateway {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl AppError {
    /// A 400 listing every validation failure.
    pub fn validation(violations: Vec<String>) -> Self {
        AppError::BadRequest {
            message: "Validation failed".to_string(),
            violations,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::MissingEndpoints => AppError::BadRequest {
                message: e.to_string(),
                violations: Vec::new(),
            },
            SearchError::InvalidResponse => AppError::Internal {
                message: e.to_string(),
            },
            SearchError::Upstream(e) => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateTripId(_) => AppError::Conflict {
                message: e.to_string(),
            },
            StoreError::MissingTripId | StoreError::InvalidId(_) => AppError::BadRequest {
                message: e.to_string(),
                violations: Vec::new(),
            },
            StoreError::Io(_) | StoreError::Json(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            CatalogError::Store(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, violations) = match self {
            AppError::BadRequest {
                message,
                violations,
            } => (message, violations),
            AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::BadGateway { message }
            | AppError::Internal { message } => (message, Vec::new()),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "request failed");
        } else {
            warn!(status = status.as_u16(), %message, ?violations, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: message,
            violations,
        });
        (status, body).into_response()
    }
}
