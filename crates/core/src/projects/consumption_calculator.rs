//! Linear consumption valuation for prepaid projects.
//!
//! The lump sum is consumed evenly, day by day, across the project window.
//! Status is a pure function of the evaluation instant versus the window
//! boundaries; the boundary comparisons use the raw instants while the
//! reported day counts are clamped for display.

use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValuationError};
use crate::projects::{Project, ProjectStatus, ProjectValuation};
use crate::utils::time_utils::days_between;

/// Valuates `project` at the given evaluation instant.
///
/// Guarantees `used_cost + remaining_value == total_amount` within one cent:
/// the remaining value is derived from the unrounded used cost before either
/// is rounded for output.
pub fn valuate_project(project: &Project, as_of: DateTime<Utc>) -> Result<ProjectValuation> {
    let total_days = days_between(project.start_time, project.end_time);
    validate_project(project, total_days)?;

    let elapsed_days = days_between(project.start_time, as_of);
    let remaining_days = days_between(as_of, project.end_time);

    let (status, progress_pct, used_cost, remaining_value) = if as_of < project.start_time {
        (
            ProjectStatus::NotStarted,
            Decimal::zero(),
            Decimal::zero(),
            project.total_amount,
        )
    } else if as_of > project.end_time {
        (
            ProjectStatus::Expired,
            dec!(100),
            project.total_amount,
            Decimal::zero(),
        )
    } else {
        let elapsed = Decimal::from(elapsed_days);
        let total = Decimal::from(total_days);
        let progress = (elapsed / total * dec!(100)).min(dec!(100));
        let used = project.total_amount * elapsed / total;
        (
            ProjectStatus::Active,
            progress,
            used,
            project.total_amount - used,
        )
    };

    Ok(ProjectValuation {
        project_id: project.id.clone(),
        as_of,
        status,
        total_days,
        elapsed_days: elapsed_days.max(0),
        remaining_days: remaining_days.max(0),
        total_amount: project.total_amount.round_dp(DISPLAY_DECIMAL_PRECISION),
        progress_pct: progress_pct.round_dp(DISPLAY_DECIMAL_PRECISION),
        used_cost: used_cost.round_dp(DISPLAY_DECIMAL_PRECISION),
        remaining_value: remaining_value.round_dp(DISPLAY_DECIMAL_PRECISION),
    })
}

/// Convenience wrapper evaluating at the current instant.
pub fn valuate_project_now(project: &Project) -> Result<ProjectValuation> {
    valuate_project(project, Utc::now())
}

/// The window invariant (`end_time > start_time`, at least one whole day)
/// should have been enforced at creation; a violation here is signaled
/// rather than allowed to divide by zero.
fn validate_project(project: &Project, total_days: i64) -> Result<()> {
    if project.end_time <= project.start_time || total_days <= 0 {
        return Err(ValuationError::InvalidProject(format!(
            "project {} has a non-positive consumption window ({} -> {})",
            project.id, project.start_time, project.end_time
        ))
        .into());
    }
    if project.total_amount <= Decimal::zero() {
        return Err(ValuationError::InvalidProject(format!(
            "project {} has non-positive total amount ({})",
            project.id, project.total_amount
        ))
        .into());
    }
    Ok(())
}
