use serde::{Deserialize, Serialize};

/// One entry in the session-scoped error trail (`admin_errors`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ErrorRecord {
    pub timestamp: String,
    pub message: String,
    pub url: String,
}

/// Snapshot copied from a category edit trigger into the edit modal.
///
/// Overwritten wholesale on every click; never merged with previous state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CategoryEditTarget {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl CategoryEditTarget {
    pub(crate) fn from_attrs(
        id: Option<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    }
}

/// Snapshot copied from a tag edit trigger into the edit modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TagEditTarget {
    pub id: String,
    pub name: String,
}

impl TagEditTarget {
    pub(crate) fn from_attrs(id: Option<String>, name: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            name: name.unwrap_or_default(),
        }
    }
}
