//! Category domain models and aggregation views.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::valuation::SkippedRecord;

/// A grouping key for records (hierarchical via `parent_id`).
///
/// Ownership and CRUD live in the storage layer; the engine only consumes a
/// flat, already-scoped list. Depth is arbitrary and the data is not trusted
/// to be acyclic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub parent_id: Option<String>,
}

/// Which metric orders categories in aggregation output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityMetric {
    /// Number of records (own + descendants).
    RecordCount,
    /// Utilized value: consumed depreciation plus used cost (own + descendants).
    #[default]
    ConsumedValue,
}

/// Aggregated statistics for one category.
///
/// `own_*` fields cover records assigned directly to the category;
/// `rollup_*` fields add every descendant category's records on top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub parent_id: Option<String>,
    pub record_count: u32,
    pub total_original: Decimal,
    pub total_current: Decimal,
    pub total_consumed: Decimal,
    /// Record counts per lifecycle state string.
    pub status_counts: HashMap<String, u32>,
    pub rollup_record_count: u32,
    pub rollup_original: Decimal,
    pub rollup_current: Decimal,
    pub rollup_consumed: Decimal,
}

/// A category's stats nested under its parent for hierarchical display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatsNode {
    #[serde(flatten)]
    pub stats: CategoryStats,
    pub children: Vec<CategoryStatsNode>,
}

/// The full aggregation output: one pass, two projections.
///
/// `table` and `tree` are views of the same per-category stats — never
/// computed independently — so tabular and hierarchical displays always
/// agree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregation {
    pub metric: ActivityMetric,
    /// Flat per-category table, ordered by the activity metric descending,
    /// ties broken by category id ascending.
    pub table: Vec<CategoryStats>,
    /// Parent/child tree with the same ordering applied at every level.
    pub tree: Vec<CategoryStatsNode>,
    /// Records dropped because their own valuation failed (populated by
    /// `aggregate_records`; empty when aggregating pre-computed valuations).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}
