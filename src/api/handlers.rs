use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use super::extract::{EmployeeId, ValidatedEmployee};
use super::ApiError;
use crate::db::Database;
use crate::models::*;

pub async fn list_employees(
    State(db): State<Database>,
    query: ListEmployeesQuery,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(db.list_employees(query.term())?))
}

pub async fn get_employee(
    State(db): State<Database>,
    id: EmployeeId,
) -> Result<Json<Employee>, ApiError> {
    let id = id.get()?;
    db.get_employee(id)?.map(Json).ok_or(ApiError::NotFound)
}

pub async fn create_employee(
    State(db): State<Database>,
    ValidatedEmployee(input): ValidatedEmployee,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = db.create_employee(&input)?;
    tracing::info!(id = employee.id, "Created employee");
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee(
    State(db): State<Database>,
    id: EmployeeId,
    ValidatedEmployee(input): ValidatedEmployee,
) -> Result<Json<Employee>, ApiError> {
    let id = id.get()?;
    db.update_employee(id, &input)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_employee(
    State(db): State<Database>,
    id: EmployeeId,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = id.get()?;
    if db.delete_employee(id)? {
        tracing::info!(id, "Deleted employee");
        Ok(Json(MessageResponse {
            message: "Employee deleted successfully".to_string(),
        }))
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn endpoint_not_found() -> ApiError {
    ApiError::EndpointNotFound
}

/// Outer fallback. Catches `/api/...` paths the nested router never sees,
/// such as `/api/` with a trailing slash.
pub async fn not_found(uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        ApiError::EndpointNotFound.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}
