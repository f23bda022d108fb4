//! Client-facing response messages
//!
//! Every status line the API sends back is defined here so handlers and tests
//! agree on the exact wording.

pub const INTERNAL_SERVER_ERROR: &str = "internal server error";
pub const BAD_REQUEST: &str = "bad request";
pub const UNAUTHORIZED: &str = "unauthorized";

pub const USER_REGISTERED: &str = "user registered successfully";
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

pub const CUSTOMER_NOT_FOUND: &str = "customer not found";

pub const USERNAME_REQUIRED: &str = "username is required";
pub const PASSWORD_REQUIRED: &str = "password is required";

pub const SEARCH_FILTER_REQUIRED: &str =
    "Please provide at least name, email, or account_number for the search";

/// Message returned when either credential field is blank
pub fn credentials_required() -> String {
    format!("{} and {}", USERNAME_REQUIRED, PASSWORD_REQUIRED)
}
