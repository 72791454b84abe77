//! Discovery feed and search services.

pub mod service;

pub use service::{FEED_PAGE_SIZE, FeedService};
