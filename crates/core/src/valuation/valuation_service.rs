//! Batch enrichment of mixed record collections.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::{debug, warn};

use crate::assets::{calculate_depreciation, FixedAsset};
use crate::projects::{valuate_project, Project};
use crate::utils::time_utils::{valuation_date_from_utc, DEFAULT_VALUATION_TZ};
use crate::valuation::{BatchValuation, RecordKind, RecordValuation, SkippedRecord};

/// Valuates every asset and project at the given instant, in the default
/// valuation timezone.
pub fn valuate_records(
    assets: &[FixedAsset],
    projects: &[Project],
    as_of: DateTime<Utc>,
) -> BatchValuation {
    valuate_records_with_tz(assets, projects, as_of, DEFAULT_VALUATION_TZ)
}

/// Valuates every asset and project at the given instant.
///
/// Depreciation is date-based, so `as_of` is converted to a valuation date
/// in `tz`; project consumption uses the raw instant. A record whose own
/// valuation fails is logged, reported in `skipped`, and does not affect
/// the rest of the batch.
pub fn valuate_records_with_tz(
    assets: &[FixedAsset],
    projects: &[Project],
    as_of: DateTime<Utc>,
    tz: Tz,
) -> BatchValuation {
    let as_of_date = valuation_date_from_utc(as_of, tz);
    debug!(
        "Valuating {} assets and {} projects as of {} ({})",
        assets.len(),
        projects.len(),
        as_of,
        as_of_date
    );

    let mut valuations = Vec::with_capacity(assets.len() + projects.len());
    let mut skipped = Vec::new();

    for asset in assets {
        match calculate_depreciation(asset, as_of_date) {
            Ok(result) => valuations.push(RecordValuation::from_asset(asset, &result)),
            Err(e) => {
                warn!("Skipping asset {} in batch valuation: {}", asset.id, e);
                skipped.push(SkippedRecord {
                    record_id: asset.id.clone(),
                    kind: RecordKind::FixedAsset,
                    reason: e.to_string(),
                });
            }
        }
    }

    for project in projects {
        match valuate_project(project, as_of) {
            Ok(valuation) => valuations.push(RecordValuation::from_project(project, &valuation)),
            Err(e) => {
                warn!("Skipping project {} in batch valuation: {}", project.id, e);
                skipped.push(SkippedRecord {
                    record_id: project.id.clone(),
                    kind: RecordKind::Project,
                    reason: e.to_string(),
                });
            }
        }
    }

    BatchValuation {
        as_of,
        as_of_date,
        valuations,
        skipped,
    }
}
