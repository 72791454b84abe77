//! # newsdesk-entity
//!
//! Domain entity models for Newsdesk: the persisted folder hierarchy and
//! the read-only DTOs consumed from the external news content service.

pub mod content;
pub mod folder;

pub use content::{Article, FeedItem, FeedPayload, FolderContent, Thread, ThreadView};
pub use folder::{CreateFolder, Folder, FolderNode};
