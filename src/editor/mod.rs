//! Group editor
//!
//! Models the "edit group" dialog as an explicit state machine:
//!
//! - `open(Some(group))` loads a fresh draft from the group, discarding any
//!   unsaved edits from an earlier session
//! - `open(None)` opens with an empty draft that can never be saved
//! - edits (`set_name`, `add_manual_entry`, `delete_entry`, `remove_at`,
//!   `apply_import`) change only the draft
//! - `commit` hands `{ ...source, name, addresses }` to a [`GroupSink`] and
//!   closes; `cancel` closes without saving
//!
//! New rows get no identifier; the backend assigns one when the group is
//! persisted. `delete_entry` therefore only reaches saved rows, and
//! `remove_at` is the positional path the dialog uses for the rest.

mod state;

pub use state::{Draft, EditorState};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::import::ImportedRow;
use crate::{Address, Group};

/// Receives the finalized group on save
pub trait GroupSink {
    fn save_group(&mut self, group: Group) -> Result<()>;
}

impl<F> GroupSink for F
where
    F: FnMut(Group) -> Result<()>,
{
    fn save_group(&mut self, group: Group) -> Result<()> {
        self(group)
    }
}

/// Why a commit did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Dialog is closed
    NotOpen,
    /// Dialog was opened without a group
    NoGroup,
    /// Name is empty after trimming
    EmptyName,
}

/// Outcome of [`GroupEditor::commit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Sink accepted the group; the dialog is closed
    Saved,
    /// Validation failed; the sink was not called and the dialog stays open
    Rejected(RejectReason),
    /// Sink returned an error; the dialog stays open with the draft intact
    Failed(String),
}

impl CommitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, CommitOutcome::Saved)
    }
}

/// Editable copy of one group, driven by dialog events
#[derive(Debug, Default)]
pub struct GroupEditor {
    state: EditorState,
    session: u64,
}

impl GroupEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Counter bumped on every open; imports tagged with an older session are
    /// discarded when they arrive.
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.state.draft()
    }

    /// Mutable draft for binding input widgets
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.state.draft_mut()
    }

    /// Open the dialog, resetting the draft from `group`
    pub fn open(&mut self, group: Option<Group>) {
        self.session += 1;
        self.state = match group {
            Some(group) => {
                debug!(
                    "Opening group '{}' with {} addresses",
                    group.name,
                    group.addresses.len()
                );
                let draft = Draft::from(&group);
                EditorState::OpenLoaded {
                    source: group,
                    draft,
                }
            }
            None => EditorState::OpenEmpty(Draft::default()),
        };
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.state.draft_mut() {
            draft.name = name.into();
        }
    }

    /// Owning group id for new rows (empty when no group is loaded)
    fn owning_group_id(&self) -> String {
        self.state
            .source()
            .map(|g| g.id.clone())
            .unwrap_or_default()
    }

    /// Append one address typed by the user.
    ///
    /// Returns false (and changes nothing) when the trimmed address is empty
    /// or the dialog is closed.
    pub fn add_manual_entry(&mut self, address: &str, amount: &str) -> bool {
        let address = address.trim();
        if address.is_empty() {
            return false;
        }

        let group_id = self.owning_group_id();
        match self.state.draft_mut() {
            Some(draft) => {
                draft
                    .addresses
                    .push(Address::unsaved(group_id, address, amount.trim()));
                true
            }
            None => false,
        }
    }

    /// Add the entry held in the draft's pending inputs, clearing them on
    /// success
    pub fn add_pending_entry(&mut self) -> bool {
        let Some(draft) = self.state.draft() else {
            return false;
        };
        let (address, amount) = (draft.pending_address.clone(), draft.pending_amount.clone());

        if !self.add_manual_entry(&address, &amount) {
            return false;
        }
        if let Some(draft) = self.state.draft_mut() {
            draft.pending_address.clear();
            draft.pending_amount.clear();
        }
        true
    }

    /// Remove the first address whose backend identifier is `id`.
    ///
    /// Rows without an identifier never match, including for an empty `id`.
    pub fn delete_entry(&mut self, id: &str) -> Option<Address> {
        let draft = self.state.draft_mut()?;
        let index = draft.addresses.iter().position(|a| a.has_id(id))?;
        Some(draft.addresses.remove(index))
    }

    /// Remove the address at `index` (works for unsaved rows too)
    pub fn remove_at(&mut self, index: usize) -> Option<Address> {
        let draft = self.state.draft_mut()?;
        (index < draft.addresses.len()).then(|| draft.addresses.remove(index))
    }

    /// Append an imported batch in source order, as one step.
    ///
    /// Returns the number of rows appended; batches from another session or
    /// arriving after close are dropped.
    pub fn apply_import(&mut self, session: u64, rows: Vec<ImportedRow>) -> usize {
        if session != self.session || !self.state.is_open() {
            debug!(
                "Dropping {} imported rows from session {} (current {}, {})",
                rows.len(),
                session,
                self.session,
                self.state.as_str()
            );
            return 0;
        }

        let group_id = self.owning_group_id();
        let Some(draft) = self.state.draft_mut() else {
            return 0;
        };

        let count = rows.len();
        draft.addresses.extend(
            rows.into_iter()
                .map(|row| Address::unsaved(group_id.clone(), row.address, row.amount)),
        );
        count
    }

    /// Save the draft through `sink` and close the dialog
    pub fn commit(&mut self, sink: &mut impl GroupSink) -> CommitOutcome {
        let (source, draft) = match &self.state {
            EditorState::Closed => return CommitOutcome::Rejected(RejectReason::NotOpen),
            EditorState::OpenEmpty(_) => return CommitOutcome::Rejected(RejectReason::NoGroup),
            EditorState::OpenLoaded { source, draft } => (source, draft),
        };

        let name = draft.name.trim();
        if name.is_empty() {
            return CommitOutcome::Rejected(RejectReason::EmptyName);
        }

        let group = Group {
            name: name.to_string(),
            addresses: draft.addresses.clone(),
            ..source.clone()
        };

        match sink.save_group(group) {
            Ok(()) => {
                info!("Committed group '{}'", name);
                self.state = EditorState::Closed;
                CommitOutcome::Saved
            }
            Err(e) => {
                warn!("Failed to save group '{}': {:#}", name, e);
                CommitOutcome::Failed(format!("{:#}", e))
            }
        }
    }

    /// Close without saving; the draft is discarded
    pub fn cancel(&mut self) {
        if self.state.is_open() {
            debug!("Dialog cancelled");
        }
        self.state = EditorState::Closed;
    }
}
