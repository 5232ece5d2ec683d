//! Lendhub Domain - Wire types for the equipment-lending API
//!
//! This crate mirrors the server's schema one-to-one. The types here are
//! passthrough records: the client transports them without validating or
//! mutating their internal invariants (status transitions, service-interval
//! dates, and so on are the server's business).

pub mod equipment;
pub mod lending;
pub mod person;
pub mod user;

pub use equipment::{Equipment, EquipmentDraft, EquipmentStatus};
pub use lending::{Lending, LendingCreate};
pub use person::{Person, PersonProfileUpdate, PersonRole, PersonUpdate};
pub use user::{AuthSession, PasswordChange, User, UserCreate, UserLogin};
