//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name that marks a folder as the owner's default container,
/// compared case-insensitively.
pub const SAVE_FOR_LATER: &str = "save for later";

/// A user-owned folder grouping saved content references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// The folder owner; every operation is scoped by this field.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional display color, no semantic meaning.
    pub color: Option<String>,
    /// Star flag, independent of tree position.
    pub starred: bool,
    /// Parent folder ID (None for root folders). Weak reference: the tree
    /// builder tolerates dangling values.
    pub parent_id: Option<Uuid>,
    /// External article ids saved directly in this folder. Set semantics,
    /// exposed in insertion order.
    pub article_ids: Vec<String>,
    /// External thread ids saved in this folder.
    pub thread_ids: Vec<String>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this folder is the owner's default "save for later"
    /// container.
    pub fn is_save_for_later(&self) -> bool {
        self.name.eq_ignore_ascii_case(SAVE_FOR_LATER)
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The folder owner.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional display color.
    pub color: Option<String>,
    /// Initial star flag.
    pub starred: bool,
    /// Parent folder (None for root).
    pub parent_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(name: &str) -> Folder {
        Folder {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            color: None,
            starred: false,
            parent_id: None,
            article_ids: Vec::new(),
            thread_ids: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_for_later_case_insensitive() {
        assert!(folder("Save for Later").is_save_for_later());
        assert!(folder("SAVE FOR LATER").is_save_for_later());
        assert!(!folder("Saved").is_save_for_later());
    }
}
