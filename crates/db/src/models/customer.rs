//! Customer document model and DTOs.

use customers_core::types::DocId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A customer document from the `customers` table.
///
/// Every field except `id` is nullable in storage; absent values serialize
/// as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(value_type = String, format = Uuid)]
    pub id: DocId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// DTO for creating a customer.
///
/// `firstName`, `lastName`, `email` and `phoneNumber` are expected by
/// clients but not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// DTO for updating a customer. Only non-`None` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Customer {
    /// Build the document stored for `input` under a freshly allocated `id`.
    pub fn new(id: DocId, input: &CreateCustomer) -> Self {
        Self {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone_number: input.phone_number.clone(),
            city: input.city.clone(),
            country: input.country.clone(),
        }
    }

    /// Overwrite the fields present in `input`, leaving the rest untouched.
    pub fn merge(&mut self, input: &UpdateCustomer) {
        fn set(slot: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }

        set(&mut self.first_name, &input.first_name);
        set(&mut self.last_name, &input.last_name);
        set(&mut self.email, &input.email);
        set(&mut self.phone_number, &input.phone_number);
        set(&mut self.city, &input.city);
        set(&mut self.country, &input.country);
    }
}
