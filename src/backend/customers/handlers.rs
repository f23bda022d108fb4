/**
 * Customer Search Handler
 *
 * `GET /customers?name=&email=&account_number=` behind the auth middleware.
 * Blank parameters count as absent; at least one must be present.
 */

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::customers::filter::CustomerFilter;
use crate::backend::customers::service::CustomerService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::message;
use crate::shared::Customer;

/// Query string accepted by `GET /customers`
#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_number: Option<String>,
}

impl From<SearchParams> for CustomerFilter {
    fn from(params: SearchParams) -> Self {
        CustomerFilter::new(params.name, params.email, params.account_number)
    }
}

/// Search results wrapper
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub data: Vec<Customer>,
}

/// Search customers
///
/// # Errors
///
/// * `400 Bad Request` - No filter supplied, or an unparseable query string
/// * `404 Not Found` - Nothing matched
/// * `500 Internal Server Error` - Store failure
pub async fn search_customers(
    AuthUser(user): AuthUser,
    State(customers): State<CustomerService>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, BackendError> {
    let Query(params) = query?;
    let filter = CustomerFilter::from(params);
    let found = customers.search(&filter).await?;

    if found.is_empty() {
        tracing::info!("Customer search by user {} matched nothing", user.user_id);
        return Err(BackendError::not_found(message::CUSTOMER_NOT_FOUND));
    }

    tracing::info!(
        "Customer search by user {} returned {} records",
        user.user_id,
        found.len()
    );
    Ok(Json(SearchResponse { data: found }))
}
