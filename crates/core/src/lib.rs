//! Worthwatch Core - the temporal valuation engine.
//!
//! This crate answers, for any evaluation instant, "what is this asset worth
//! right now, and how much of its value has been consumed?" for two record
//! kinds: depreciating fixed assets and linearly-consumed prepaid projects,
//! plus category-level rollups over both.
//!
//! The engine is purely functional and stateless: every entry point takes
//! immutable, already-loaded records and an evaluation timestamp and returns
//! a freshly computed view. It performs no I/O, stores no derived state, and
//! is trivially safe to call concurrently. Storage, authentication, HTTP,
//! and presentation are external collaborators.

pub mod assets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod projects;
pub mod utils;
pub mod valuation;

// Re-export common types from the domain modules
pub use assets::*;
pub use categories::*;
pub use projects::*;
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
