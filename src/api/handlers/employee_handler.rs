//! Employee handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{DeleteResponse, EmployeeRequest, EmployeeResponse};
use crate::errors::AppResult;

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee).get(list_employees))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Missing or malformed field"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.create_employee(payload).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees in storage order", body = Vec<EmployeeResponse>)
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_employees().await?;

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(id).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Update employee, overwriting all mutable fields
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.update_employee(id, payload).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Delete employee and its address in one transaction
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee and associated address deleted", body = DeleteResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DeleteResponse>> {
    state.employee_service.delete_employee(id).await?;

    Ok(Json(DeleteResponse { result: true }))
}
