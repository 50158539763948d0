//! Student endpoints.
//!
//! - `GET /students` — all records, newest first; `?id=N` filters to one
//! - `GET /students/:id` — single record or 404
//! - `POST /students` — validate, advisory duplicate pre-check, insert
//! - `GET /health` — liveness

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::store::{NewStudent, StudentRecord, StudentStore};
use crate::validator::validate_form;

use super::errors::{ApiError, ApiResult};
use super::response::{Envelope, HealthResponse};

/// Shared application state, constructed at startup and injected into
/// handlers. The store is chosen by configuration; handlers never know
/// which engine backs it.
pub struct AppState {
    pub store: Box<dyn StudentStore>,
}

impl AppState {
    pub fn new(store: Box<dyn StudentStore>) -> Self {
        Self { store }
    }
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

/// Student CRUD routes
pub fn student_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/:id", get(get_student))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    id: Option<i64>,
}

/// Request body for student creation
#[derive(Debug, Deserialize)]
struct CreateStudentBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    course: String,
    #[serde(default)]
    date_of_birth: String,
}

async fn list_students(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Response> {
    if let Some(id) = query.id {
        let record = fetch_student(&state, id).await?;
        return Ok(
            Json(Envelope::ok("Student fetched successfully", record)).into_response(),
        );
    }

    let students = state.store.list_all().await?;
    Ok(Json(Envelope::ok("Students fetched successfully", students)).into_response())
}

async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Envelope<StudentRecord>>> {
    let record = fetch_student(&state, id).await?;
    Ok(Json(Envelope::ok("Student fetched successfully", record)))
}

async fn fetch_student(state: &AppState, id: i64) -> ApiResult<StudentRecord> {
    state
        .store
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)
}

async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateStudentBody>,
) -> ApiResult<(StatusCode, Json<Envelope<StudentRecord>>)> {
    let today = Utc::now().date_naive();
    let errors = validate_form(
        &body.name,
        &body.email,
        &body.course,
        &body.date_of_birth,
        today,
    );
    if !errors.is_valid() {
        return Err(errors.into());
    }

    // Validation guarantees the date parses.
    let date_of_birth = NaiveDate::parse_from_str(body.date_of_birth.trim(), "%Y-%m-%d")
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let candidate = NewStudent {
        name: body.name,
        email: body.email,
        course: body.course,
        date_of_birth,
    };

    // Advisory pre-check: a friendlier error on the common path. The
    // store's unique constraint stays authoritative under races.
    if state
        .store
        .get_by_email(&candidate.email)
        .await?
        .is_some()
    {
        return Err(ApiError::DuplicateEmail);
    }

    let record = state.store.create(&candidate).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Student registered successfully", record)),
    ))
}
