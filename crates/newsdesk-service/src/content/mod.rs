//! Cross-source content aggregation.

pub mod aggregation;

pub use aggregation::AggregationService;
