//! Address domain entity and related types.
//!
//! An address belongs to exactly one employee and is never deleted on its
//! own; it disappears with its owner via the cascade delete.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Address domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i32,
    pub city: String,
    pub post_code: String,
    pub street: String,
    pub number: i32,
    pub employee_id: i32,
}

/// Mutable address fields, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressFields {
    pub city: String,
    pub post_code: String,
    pub street: String,
    pub number: i32,
}

/// Address create/update request body.
///
/// The owning employee id comes from the URL path, not the body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(length(min = 1, max = 100, message = "city must not be empty"))]
    #[schema(example = "Metropolis")]
    pub city: String,
    /// Postal code, at most 6 characters
    #[validate(length(min = 1, max = 6, message = "postCode must be 1 to 6 characters"))]
    #[schema(example = "12345")]
    pub post_code: String,
    #[validate(length(min = 1, max = 100, message = "street must not be empty"))]
    #[schema(example = "Main")]
    pub street: String,
    /// Street number; accepted as a JSON integer or a numeric string
    #[serde(deserialize_with = "number_from_input")]
    #[schema(example = 42)]
    pub number: i32,
}

impl From<AddressRequest> for AddressFields {
    fn from(request: AddressRequest) -> Self {
        Self {
            city: request.city,
            post_code: request.post_code,
            street: request.street,
            number: request.number,
        }
    }
}

/// Coerce the street number from either a JSON integer or a numeric string.
fn number_from_input<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberInput {
        Int(i32),
        Text(String),
    }

    match NumberInput::deserialize(deserializer)
        .map_err(|_| serde::de::Error::custom("number must be numeric"))?
    {
        NumberInput::Int(n) => Ok(n),
        NumberInput::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom("number must be numeric")),
    }
}

/// Address response body
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    /// Unique address identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Metropolis")]
    pub city: String,
    #[schema(example = "12345")]
    pub post_code: String,
    #[schema(example = "Main")]
    pub street: String,
    #[schema(example = 42)]
    pub number: i32,
    /// Owning employee id
    #[schema(example = 1)]
    pub employee_id: i32,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            city: address.city,
            post_code: address.post_code,
            street: address.street,
            number: address.number,
            employee_id: address.employee_id,
        }
    }
}
