//! HTTP server for the cmdbook command catalog.
//!
//! Exposes the command service as a REST resource. The transport only
//! translates: service outcomes map to statuses (`NotFound` to 404,
//! `IdMismatch` to 400, store faults to 500) and records pass through as
//! JSON. Business rules live in `cmdbook-service`.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::CmdbookServer;
