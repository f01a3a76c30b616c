//! Working state shared by the store backends.

use std::collections::BTreeMap;

use cmdbook_types::{Command, CommandDraft, CommandId};

/// The record set plus the id cursor.
///
/// Ids strictly increase and are never reused, so ascending id order is
/// insertion order and the `BTreeMap` can be walked directly for `list`.
#[derive(Debug)]
pub(crate) struct CatalogState {
    pub(crate) records: BTreeMap<CommandId, Command>,
    pub(crate) next_id: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl CatalogState {
    /// Insert a new record under the next unused id.
    ///
    /// Returns `None` and writes nothing once the cursor has no successor,
    /// so an id is never handed out twice even at the end of the range.
    pub(crate) fn add(&mut self, draft: &CommandDraft) -> Option<CommandId> {
        let next = self.next_id.checked_add(1)?;
        let id = CommandId::new(self.next_id);
        self.next_id = next;
        self.records.insert(id, Command::from_draft(id, draft.clone()));
        Some(id)
    }

    /// Overwrite the mutable fields of an existing record.
    ///
    /// Returns `false` and writes nothing if the id is absent.
    pub(crate) fn replace(&mut self, id: CommandId, draft: &CommandDraft) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                *record = Command::from_draft(id, draft.clone());
                true
            }
            None => false,
        }
    }
}
