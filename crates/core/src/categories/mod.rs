//! Categories module - grouping model and the hierarchical aggregator.

pub mod aggregation_service;
pub mod categories_model;

pub use aggregation_service::{aggregate, aggregate_records};
pub use categories_model::*;
