//! Fixed assets module - domain models and the depreciation calculator.

pub mod assets_model;
pub mod depreciation_calculator;

pub use assets_model::*;
pub use depreciation_calculator::{calculate_depreciation, calculate_depreciation_today};
