//! Employee domain entity and related types.
//!
//! The employee is the cascade root: deleting one also removes its
//! associated address row in the same transaction (see the services layer).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all employees; nullable at the schema level
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Added in a later schema revision; rows predating it hold NULL
    pub position: Option<String>,
    pub salary: i32,
    /// Set once at creation, never mutated
    pub created: DateTime<Utc>,
}

/// Mutable employee fields, shared by create and update.
///
/// Update overwrites every field here in one statement; `id` and `created`
/// are never part of a write.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub salary: i32,
}

/// Employee create/update request body.
///
/// POST and PUT take the same shape: every mutable field is required and an
/// update replaces all of them.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Given name
    #[validate(length(min = 1, max = 100, message = "firstName must not be empty"))]
    #[schema(example = "Jane")]
    pub first_name: String,
    /// Family name
    #[validate(length(min = 1, max = 100, message = "lastName must not be empty"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Email address, unique across employees
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@x.com")]
    pub email: String,
    /// Birth date as a YYYY-MM-DD string
    #[schema(example = "1990-05-10")]
    pub birth_date: String,
    /// Job title
    #[validate(length(max = 100, message = "position is too long"))]
    #[schema(example = "Engineer")]
    pub position: String,
    /// Salary in whole currency units
    #[schema(example = 90000)]
    pub salary: i32,
}

impl TryFrom<EmployeeRequest> for EmployeeFields {
    type Error = AppError;

    fn try_from(request: EmployeeRequest) -> AppResult<Self> {
        let birth_date = parse_birth_date(&request.birth_date)?;
        Ok(Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: Some(request.email),
            birth_date: Some(birth_date),
            position: Some(request.position),
            salary: request.salary,
        })
    }
}

/// Parse a `YYYY-MM-DD` birth date string.
///
/// The string must split on `-` into exactly three numeric components that
/// form a real calendar date; anything else is a validation error, raised
/// before any row is written.
pub fn parse_birth_date(input: &str) -> AppResult<NaiveDate> {
    let parts: Vec<&str> = input.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(AppError::validation(
            "birthDate must be a YYYY-MM-DD date string",
        ));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| AppError::validation("birthDate year must be numeric"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| AppError::validation("birthDate month must be numeric"))?;
    let day: u32 = day
        .parse()
        .map_err(|_| AppError::validation("birthDate day must be numeric"))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::validation("birthDate is not a valid calendar date"))
}

/// Employee response body
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Unique employee identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@x.com")]
    pub email: Option<String>,
    #[schema(example = "1990-05-10")]
    pub birth_date: Option<NaiveDate>,
    #[schema(example = "Engineer")]
    pub position: Option<String>,
    #[schema(example = 90000)]
    pub salary: i32,
    /// Record creation timestamp
    pub created: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            birth_date: employee.birth_date,
            position: employee.position,
            salary: employee.salary,
            created: employee.created,
        }
    }
}

/// Body returned by a successful employee delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = true)]
    pub result: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birth_date_valid() {
        let date = parse_birth_date("1990-05-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 5, 10).unwrap());
    }

    #[test]
    fn test_parse_birth_date_rejects_non_numeric() {
        assert!(matches!(
            parse_birth_date("not-a-date"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_birth_date_rejects_wrong_component_count() {
        assert!(parse_birth_date("1990-05").is_err());
        assert!(parse_birth_date("1990-05-10-07").is_err());
        assert!(parse_birth_date("").is_err());
    }

    #[test]
    fn test_parse_birth_date_rejects_impossible_date() {
        assert!(parse_birth_date("1990-13-10").is_err());
        assert!(parse_birth_date("1990-02-30").is_err());
    }

    #[test]
    fn test_request_conversion_keeps_all_fields() {
        let request = EmployeeRequest {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            birth_date: "1990-05-10".into(),
            position: "Engineer".into(),
            salary: 90_000,
        };

        let fields = EmployeeFields::try_from(request).unwrap();
        assert_eq!(fields.first_name, "Jane");
        assert_eq!(fields.email.as_deref(), Some("jane@x.com"));
        assert_eq!(
            fields.birth_date,
            Some(NaiveDate::from_ymd_opt(1990, 5, 10).unwrap())
        );
        assert_eq!(fields.position.as_deref(), Some("Engineer"));
        assert_eq!(fields.salary, 90_000);
    }

    #[test]
    fn test_request_conversion_propagates_date_error() {
        let request = EmployeeRequest {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            birth_date: "10.05.1990".into(),
            position: "Engineer".into(),
            salary: 90_000,
        };

        assert!(EmployeeFields::try_from(request).is_err());
    }
}
