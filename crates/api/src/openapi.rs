//! Generated OpenAPI document for the `/customers` routes.

use customers_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use utoipa::OpenApi;

use crate::handlers::customer;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customers API",
        description = "Crud customers",
    ),
    paths(
        customer::list,
        customer::get_by_id,
        customer::create,
        customer::update,
        customer::patch,
        customer::delete,
    ),
    components(schemas(Customer, CreateCustomer, UpdateCustomer)),
    tags((name = "customers", description = "Customer documents"))
)]
pub struct ApiDoc;

/// Build the OpenAPI document served at `/customers/api-docs`.
pub fn document() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
