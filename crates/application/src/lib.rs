//! Lendhub Application - client core
//!
//! The pieces between the wire types and the concrete I/O adapters:
//! the [`ApiClient`] (single point of HTTP traffic and token custody),
//! one stateless service per REST resource, and the reactive [`AuthStore`].
//!
//! Nothing in this crate talks to the network or the filesystem directly;
//! both concerns sit behind the traits in [`ports`] and are wired in by the
//! composition root.

pub mod client;
pub mod error;
pub mod ports;
pub mod services;
pub mod store;
pub mod testutil;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use services::{
    AuthService, EquipmentService, HealthService, LendingService, PersonService,
};
pub use store::{AuthState, AuthStore};
