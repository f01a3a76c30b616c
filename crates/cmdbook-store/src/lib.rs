//! Storage backends for the cmdbook catalog.
//!
//! The catalog is an id-keyed set of [`Command`](cmdbook_types::Command)
//! records owned by a store. All backends implement the [`CommandStore`]
//! trait:
//!
//! - [`InMemoryCommandStore`]: a `BTreeMap` behind a `RwLock`, for tests and
//!   ephemeral serving
//! - [`FileCommandStore`]: the same working state, snapshotted to a single
//!   JSON document at the commit point
//!
//! # Design Rules
//!
//! 1. The store owns id assignment: ids start at 1, strictly increase, and
//!    are never reused, neither within a process nor (for the file backend)
//!    across reopens.
//! 2. Absence is a normal outcome, never an error: lookups return `Ok(None)`
//!    and mutations on a missing id report it without failing.
//! 3. Check-then-mutate runs under a single write-lock acquisition, so
//!    `replace` and `remove` are atomic per id.
//! 4. Reads return value copies; callers never hold references into the
//!    store.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

mod state;

pub use error::{StoreError, StoreResult};
pub use file::FileCommandStore;
pub use memory::InMemoryCommandStore;
pub use traits::CommandStore;
