//! HTTP request handlers.

pub mod bookmarks;
pub mod content;
pub mod feed;
pub mod health;
pub mod search;
