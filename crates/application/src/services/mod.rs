//! Domain services: one stateless wrapper per REST resource.
//!
//! Each service maps endpoint paths and verbs onto [`crate::ApiClient`]
//! calls and types the expected payload. Services add no failure modes of
//! their own; every error is the underlying client error, forwarded as-is.

mod auth;
mod equipment;
mod health;
mod lending;
mod person;

pub use auth::AuthService;
pub use equipment::EquipmentService;
pub use health::HealthService;
pub use lending::LendingService;
pub use person::PersonService;

/// Percent-encodes a value for use in a query string.
pub(crate) fn query_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_encode_escapes_reserved_characters() {
        assert_eq!(query_encode("a@b.com"), "a%40b.com");
        assert_eq!(query_encode("two words"), "two+words");
        assert_eq!(query_encode("plain"), "plain");
    }
}
