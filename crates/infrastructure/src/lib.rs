//! Lendhub Infrastructure - Adapters and implementations
//!
//! Concrete implementations of the ports defined in the application layer:
//! the reqwest-backed transport, the file-backed token store, and the
//! base-URL/timeout configuration.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use config::ClientConfig;
pub use persistence::FileTokenStorage;
