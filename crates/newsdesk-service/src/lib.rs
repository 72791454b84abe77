//! # newsdesk-service
//!
//! Business logic service layer for Newsdesk. Each service orchestrates
//! the folder repository and the content gateway to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod content;
pub mod context;
pub mod feed;
pub mod folder;

pub use content::AggregationService;
pub use context::RequestContext;
pub use feed::FeedService;
pub use folder::{FolderService, TreeService};

#[cfg(test)]
pub(crate) mod test_support;
