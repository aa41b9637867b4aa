//! Fixed-asset domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValuationWarning;

/// Lifecycle status of a fixed asset.
///
/// Informational only — it never affects the depreciation math. A disposed
/// asset still values like any other so historical views stay consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    InUse,
    Idle,
    Maintenance,
    Disposed,
}

impl AssetStatus {
    /// Returns the wire string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::InUse => "IN_USE",
            AssetStatus::Idle => "IDLE",
            AssetStatus::Maintenance => "MAINTENANCE",
            AssetStatus::Disposed => "DISPOSED",
        }
    }
}

/// Depreciation schedule applied to a fixed asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepreciationMethod {
    #[default]
    StraightLine,
    DecliningBalance,
}

impl DepreciationMethod {
    /// Returns the wire string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "STRAIGHT_LINE",
            DepreciationMethod::DecliningBalance => "DECLINING_BALANCE",
        }
    }

    /// Parses a method from its stored string. Returns `None` for anything
    /// unrecognized so the calculator can fall back and signal the caller.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "STRAIGHT_LINE" => Some(DepreciationMethod::StraightLine),
            "DECLINING_BALANCE" => Some(DepreciationMethod::DecliningBalance),
            _ => None,
        }
    }
}

/// Domain model representing a depreciating fixed asset.
///
/// Records arrive fully loaded and already authorized from the storage
/// layer; the engine only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    pub id: String,
    pub name: String,
    pub category_id: String,
    /// Acquisition cost. Must be positive.
    pub original_value: Decimal,
    /// Residual value at end of life. Non-negative and below `original_value`.
    pub salvage_value: Decimal,
    pub purchase_date: NaiveDate,
    /// Useful life in years. Must be at least 1.
    pub useful_life_years: i32,
    /// Raw stored method string; parsed by the calculator so an unknown
    /// value degrades to straight line instead of failing the record.
    pub depreciation_method: String,
    pub status: AssetStatus,
    pub notes: Option<String>,
}

/// Computed depreciation view of a fixed asset at an evaluation date.
///
/// Never persisted — recomputed from scratch on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationResult {
    pub asset_id: String,
    pub as_of: NaiveDate,
    /// The method actually applied (after any unknown-method fallback).
    pub method: DepreciationMethod,
    pub original_value: Decimal,
    pub salvage_value: Decimal,
    /// Whole calendar months since purchase, clamped to zero for display.
    pub months_elapsed: i32,
    pub useful_life_months: i32,
    /// Straight-line monthly charge; for declining balance this is the
    /// first-month charge of the schedule.
    pub monthly_depreciation: Decimal,
    pub accumulated_depreciation: Decimal,
    pub current_value: Decimal,
    /// Share of original value consumed so far, in percent.
    pub depreciation_rate_pct: Decimal,
    pub remaining_life_months: i32,
    /// Recoverable conditions encountered during the computation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValuationWarning>,
}
