//! Read-only DTOs for content served by the external news service.
//!
//! Articles and threads are never created, mutated, or deleted by this
//! application; they are only fetched and recombined into views.

pub mod article;
pub mod feed;
pub mod thread;

pub use article::Article;
pub use feed::{FeedItem, FeedPayload, FolderContent};
pub use thread::{Thread, ThreadView};
