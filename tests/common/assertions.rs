//! Custom assertion macros and utilities
//!
//! Provides assertions for the JSON error body every failing request
//! returns.

/// Assert a response is an error with the given status and message
///
/// Checks both the HTTP status and the `{"error", "status"}` body.
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], $message, "unexpected error body: {}", body);
        assert_eq!(body["status"], $status.as_u16());
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
