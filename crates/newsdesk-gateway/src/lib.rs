//! # newsdesk-gateway
//!
//! Read-only client for the external news content service. Single-item
//! lookups come in two flavors: `resolve_*` (enrichment — failures become
//! `None` and never abort a batch) and `fetch_*` (primary — failures are
//! bad-gateway errors fatal to the request).

pub mod client;
pub mod gateway;

pub use client::NewsClient;
pub use gateway::{ContentGateway, FeedQuery, SearchQuery};
