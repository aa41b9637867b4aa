//! Valuation module - derived views and batch enrichment.

pub mod valuation_model;
pub mod valuation_service;

pub use valuation_model::*;
pub use valuation_service::{valuate_records, valuate_records_with_tz};

#[cfg(test)]
mod valuation_service_tests;
