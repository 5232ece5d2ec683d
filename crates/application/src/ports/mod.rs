//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer (or by a test double from [`crate::testutil`]).

mod http;
mod token_storage;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use token_storage::{StorageError, TokenStorage};
