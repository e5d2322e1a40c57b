//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{address_handler, employee_handler};
use crate::domain::{
    AddressRequest, AddressResponse, DeleteResponse, EmployeeRequest, EmployeeResponse,
};

/// OpenAPI documentation for the Employee API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee API",
        version = "0.1.0",
        description = "Employee/Address CRUD service with cascade delete, built on Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Employee endpoints
        employee_handler::create_employee,
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        // Address endpoints
        address_handler::create_address,
        address_handler::get_address,
        address_handler::update_address,
    ),
    components(
        schemas(
            EmployeeRequest,
            EmployeeResponse,
            AddressRequest,
            AddressResponse,
            DeleteResponse,
        )
    ),
    tags(
        (name = "Employees", description = "Employee management operations"),
        (name = "Addresses", description = "Per-employee address operations")
    )
)]
pub struct ApiDoc;
