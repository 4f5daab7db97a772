//! Draft state for the group dialog

use crate::{Address, Group};

/// In-progress edit buffer shown while the dialog is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub addresses: Vec<Address>,
    /// Address input of the "add one entry" row
    pub pending_address: String,
    /// Amount input of the "add one entry" row
    pub pending_amount: String,
}

impl From<&Group> for Draft {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            addresses: group.addresses.clone(),
            pending_address: String::new(),
            pending_amount: String::new(),
        }
    }
}

/// Dialog lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    /// Opened without a group: edits are allowed, saving is not
    OpenEmpty(Draft),
    /// Opened on a group; `source` is the copy the draft was loaded from
    OpenLoaded { source: Group, draft: Draft },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditorState::Closed => None,
            EditorState::OpenEmpty(draft) | EditorState::OpenLoaded { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            EditorState::Closed => None,
            EditorState::OpenEmpty(draft) | EditorState::OpenLoaded { draft, .. } => Some(draft),
        }
    }

    pub fn source(&self) -> Option<&Group> {
        match self {
            EditorState::OpenLoaded { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorState::Closed => "closed",
            EditorState::OpenEmpty(_) => "open-empty",
            EditorState::OpenLoaded { .. } => "open-loaded",
        }
    }
}
