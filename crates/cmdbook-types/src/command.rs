use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalogued [`Command`].
///
/// Ids are assigned by the store on creation, start at 1, and strictly
/// increase. An id is never reassigned, even after its record is deleted.
/// Serializes as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommandId(u64);

impl CommandId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CommandId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<CommandId> for u64 {
    fn from(id: CommandId) -> Self {
        id.0
    }
}

/// A catalogued command-line snippet.
///
/// Wire format uses camelCase field names:
/// `{"id":1,"howTo":"…","platform":"…","commandLine":"…"}`.
///
/// The `id` is immutable once assigned; the remaining fields are replaced
/// as a unit on update (there is no partial-field update).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub id: CommandId,
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

impl Command {
    /// Materialize a draft under a store-assigned id.
    pub fn from_draft(id: CommandId, draft: CommandDraft) -> Self {
        Self {
            id,
            how_to: draft.how_to,
            platform: draft.platform,
            command_line: draft.command_line,
        }
    }

    /// The mutable fields of this record, without the id.
    pub fn draft(&self) -> CommandDraft {
        CommandDraft {
            how_to: self.how_to.clone(),
            platform: self.platform.clone(),
            command_line: self.command_line.clone(),
        }
    }
}

/// The mutable fields of a [`Command`], before an id is assigned.
///
/// This is the create input and the replacement payload inside the store.
/// All fields are free-form text; empty values are permitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDraft {
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

impl CommandDraft {
    pub fn new(
        how_to: impl Into<String>,
        platform: impl Into<String>,
        command_line: impl Into<String>,
    ) -> Self {
        Self {
            how_to: how_to.into(),
            platform: platform.into(),
            command_line: command_line.into(),
        }
    }
}
