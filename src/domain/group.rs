//! Address group model
//!
//! A group is edited as one unit: the editor receives a copy and hands back a
//! full replacement on save. Identifiers are assigned by the backend, so a
//! freshly added address has no `_id` until the group is persisted.

use serde::{Deserialize, Serialize};

/// Backend identifier of a group
pub type GroupId = String;

/// Backend identifier of an address record
pub type AddressId = String;

/// One entry of a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Assigned by the backend, absent for rows added in the editor
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AddressId>,

    /// Owning group (empty when added without a loaded group)
    #[serde(default)]
    pub group_id: GroupId,

    /// The address string
    pub address: String,

    /// Free-text note, shown in the dialog as the transfer amount
    #[serde(default)]
    pub description: String,
}

impl Address {
    /// Create an address that has not been persisted yet
    pub fn unsaved(
        group_id: impl Into<GroupId>,
        address: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            group_id: group_id.into(),
            address: address.into(),
            description: description.into(),
        }
    }

    /// Whether this record matches the given backend identifier
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// A named collection of addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "_id", default)]
    pub id: GroupId,

    pub name: String,

    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            addresses: Vec::new(),
        }
    }

    /// Builder-style helper to attach addresses
    pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = addresses;
        self
    }
}
