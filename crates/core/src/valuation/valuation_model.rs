//! Derived valuation domain models.
//!
//! These are transient, computed views — never persisted, recomputed on
//! every read. `RecordValuation` is the common shape the aggregator and the
//! presentation layer consume for both record kinds.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{DepreciationResult, FixedAsset};
use crate::errors::ValuationWarning;
use crate::projects::{Project, ProjectValuation};

/// Which kind of record a valuation was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    FixedAsset,
    Project,
}

/// The enriched, kind-agnostic view of a single record at an evaluation
/// instant.
///
/// Amount semantics per kind:
/// - fixed asset: original value / accumulated depreciation / current value
/// - project: total amount / used cost / remaining value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordValuation {
    pub record_id: String,
    pub name: String,
    pub kind: RecordKind,
    pub category_id: String,
    /// Lifecycle state string (asset status or derived project status).
    pub status: String,
    pub original_amount: Decimal,
    pub consumed_amount: Decimal,
    pub current_value: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValuationWarning>,
}

impl RecordValuation {
    pub fn from_asset(asset: &FixedAsset, result: &DepreciationResult) -> Self {
        RecordValuation {
            record_id: asset.id.clone(),
            name: asset.name.clone(),
            kind: RecordKind::FixedAsset,
            category_id: asset.category_id.clone(),
            status: asset.status.as_str().to_string(),
            original_amount: result.original_value,
            consumed_amount: result.accumulated_depreciation,
            current_value: result.current_value,
            warnings: result.warnings.clone(),
        }
    }

    pub fn from_project(project: &Project, valuation: &ProjectValuation) -> Self {
        RecordValuation {
            record_id: project.id.clone(),
            name: project.name.clone(),
            kind: RecordKind::Project,
            category_id: project.category_id.clone(),
            status: valuation.status.as_str().to_string(),
            original_amount: valuation.total_amount,
            consumed_amount: valuation.used_cost,
            current_value: valuation.remaining_value,
            warnings: Vec::new(),
        }
    }
}

/// A record dropped from a batch because its own valuation failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    pub record_id: String,
    pub kind: RecordKind,
    pub reason: String,
}

/// The result of valuating a mixed batch of records at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchValuation {
    /// The evaluation instant the batch was computed against.
    pub as_of: DateTime<Utc>,
    /// The valuation date derived from `as_of` (used for depreciation).
    pub as_of_date: NaiveDate,
    pub valuations: Vec<RecordValuation>,
    /// Records whose valuation failed; one bad record never aborts a batch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}
