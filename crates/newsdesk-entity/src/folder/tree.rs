//! Folder tree node for hierarchical display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Folder;

/// A node in the owner's folder forest.
///
/// Carries the folder fields plus a `children` list. A node appears in
/// exactly one place in the forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional display color.
    pub color: Option<String>,
    /// Star flag.
    pub starred: bool,
    /// Parent folder ID as stored (may dangle).
    pub parent_id: Option<Uuid>,
    /// Saved article ids.
    pub article_ids: Vec<String>,
    /// Saved thread ids.
    pub thread_ids: Vec<String>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl From<Folder> for FolderNode {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            color: folder.color,
            starred: folder.starred,
            parent_id: folder.parent_id,
            article_ids: folder.article_ids,
            thread_ids: folder.thread_ids,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
            children: Vec::new(),
        }
    }
}
