//! CRUD operations over a command store.
//!
//! [`CommandService`] is the single operation layer between a transport (HTTP,
//! CLI) and a [`cmdbook_store::CommandStore`]. It enforces the catalog's
//! consistency rules and maps every outcome to a typed result:
//!
//! - absence of a record is [`ServiceError::NotFound`]
//! - an update whose body id disagrees with the addressed id is
//!   [`ServiceError::IdMismatch`], rejected before the store is touched
//! - store faults pass through as [`ServiceError::Store`]
//!
//! Mutations are committed to the store's durability point only after they
//! succeed. Transports decide how outcomes are presented; no HTTP or CLI
//! vocabulary appears here.

pub mod error;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use service::CommandService;
