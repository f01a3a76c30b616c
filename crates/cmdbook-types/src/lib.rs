//! Foundation types for the cmdbook catalog.
//!
//! Every other cmdbook crate depends on `cmdbook-types`. The crate holds the
//! domain record and its identifier:
//!
//! - [`Command`]: a catalogued command-line snippet with its platform,
//!   how-to text, and the command line itself
//! - [`CommandDraft`]: the mutable fields of a record, before an id exists
//! - [`CommandId`]: store-assigned integer identifier, never reused

pub mod command;

pub use command::{Command, CommandDraft, CommandId};
