//! Address handlers.
//!
//! All address routes hang off the owning employee; there is no
//! standalone address resource and no delete route (removal happens via
//! the employee cascade delete).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::post,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AddressRequest, AddressResponse};
use crate::errors::AppResult;

/// Create address routes (nested under /employees)
pub fn address_routes() -> Router<AppState> {
    Router::new().route(
        "/:id/address",
        post(create_address).get(get_address).put(update_address),
    )
}

/// Create the address of an employee
#[utoipa::path(
    post,
    path = "/employees/{id}/address",
    tag = "Addresses",
    params(
        ("id" = i32, Path, description = "Owning employee ID")
    ),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address created", body = AddressResponse),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Employee already has an address")
    )
)]
pub async fn create_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> AppResult<Json<AddressResponse>> {
    let address = state.address_service.create_address(id, payload).await?;

    Ok(Json(AddressResponse::from(address)))
}

/// Get the address of an employee
#[utoipa::path(
    get,
    path = "/employees/{id}/address",
    tag = "Addresses",
    params(
        ("id" = i32, Path, description = "Owning employee ID")
    ),
    responses(
        (status = 200, description = "Address record", body = AddressResponse),
        (status = 404, description = "Employee not found or has no address")
    )
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AddressResponse>> {
    let address = state.address_service.get_address(id).await?;

    Ok(Json(AddressResponse::from(address)))
}

/// Update the address of an employee, overwriting all fields
#[utoipa::path(
    put,
    path = "/employees/{id}/address",
    tag = "Addresses",
    params(
        ("id" = i32, Path, description = "Owning employee ID")
    ),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Employee not found or has no address")
    )
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> AppResult<Json<AddressResponse>> {
    let address = state.address_service.update_address(id, payload).await?;

    Ok(Json(AddressResponse::from(address)))
}
