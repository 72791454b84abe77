//! Repository implementations for Newsdesk entities.

pub mod folder;

pub use folder::FolderRepository;
