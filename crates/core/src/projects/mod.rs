//! Projects module - domain models and the consumption valuator.

pub mod consumption_calculator;
pub mod projects_model;

pub use consumption_calculator::{valuate_project, valuate_project_now};
pub use projects_model::*;
