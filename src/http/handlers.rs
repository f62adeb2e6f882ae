//! Employee route handlers.
//!
//! Handlers only translate: extract, call the service, map the result.
//! Status mapping for failures lives in `response.rs`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::employee::{CreateEmployeeInput, Employee};
use crate::error::{EmployeeError, Result};
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn get_all_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    tracing::debug!("HIT get_all_employees");
    Ok(Json(state.service.get_all_employees().await?))
}

pub async fn search_employees(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    tracing::debug!(fragment = %fragment, "HIT search_employees");
    Ok(Json(state.service.search_by_name(Some(&fragment)).await?))
}

/// `/employees/search` without a fragment matches everyone.
pub async fn search_employees_unfiltered(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>> {
    tracing::debug!("HIT search_employees (no fragment)");
    Ok(Json(state.service.search_by_name(None).await?))
}

pub async fn highest_salary(State(state): State<AppState>) -> Result<Json<i64>> {
    tracing::debug!("HIT highest_salary");
    Ok(Json(state.service.highest_salary().await?))
}

pub async fn top_ten_highest_earning_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>> {
    tracing::debug!("HIT top_ten_highest_earning_names");
    Ok(Json(state.service.top_ten_highest_earning_names().await?))
}

pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    tracing::debug!(id = %id, "HIT get_employee_by_id");
    Ok(Json(state.service.get_employee_by_id(&id).await?))
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateEmployeeInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected create payload");
        EmployeeError::ValidationFailed(rejection.body_text())
    })?;
    tracing::debug!(
        name = %input.name,
        salary = input.salary,
        age = input.age,
        title = %input.title,
        "HIT create_employee"
    );

    let created = state.service.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Responds with the deleted employee's name as plain text.
pub async fn delete_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String> {
    tracing::debug!(id = %id, "HIT delete_employee_by_id");
    state.service.delete_employee_by_id(&id).await
}
