//! Consumption project domain models.
//!
//! A project is a prepaid lump sum (gym membership, annual subscription)
//! whose value is consumed linearly over a `[start_time, end_time]` window.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project at an evaluation instant.
///
/// Re-derived fresh on every call; transitions are one-directional as the
/// evaluation instant advances (`NotStarted -> Active -> Expired`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    NotStarted,
    Active,
    Expired,
}

impl ProjectStatus {
    /// Returns the wire string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "NOT_STARTED",
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Expired => "EXPIRED",
        }
    }
}

/// Domain model representing a consumption-type virtual asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub category_id: String,
    /// Prepaid lump sum. Must be positive.
    pub total_amount: Decimal,
    pub start_time: DateTime<Utc>,
    /// Must be after `start_time`.
    pub end_time: DateTime<Utc>,
    /// When the project was bought. Informational; does not affect the math.
    pub purchase_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Computed consumption view of a project at an evaluation instant.
///
/// Never persisted — there is no stored "consumed so far" counter anywhere;
/// every read recomputes from the window and the instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectValuation {
    pub project_id: String,
    pub as_of: DateTime<Utc>,
    pub status: ProjectStatus,
    pub total_days: i64,
    /// Whole days since the window opened, clamped to zero for display.
    pub elapsed_days: i64,
    /// Whole days until the window closes, clamped to zero for display.
    pub remaining_days: i64,
    pub total_amount: Decimal,
    /// Consumption progress in percent, 0 to 100.
    pub progress_pct: Decimal,
    pub used_cost: Decimal,
    pub remaining_value: Decimal,
}
