//! Depreciation schedules for fixed assets.
//!
//! Pure functions: same asset and evaluation date always produce the same
//! result. All arithmetic is `Decimal`; rounding happens once, at the
//! output boundary, so the declining-balance recurrence never compounds
//! rounding error.

use chrono::NaiveDate;
use log::warn;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{DepreciationMethod, DepreciationResult, FixedAsset};
use crate::constants::{DECLINING_BALANCE_FACTOR, DISPLAY_DECIMAL_PRECISION, MONTHS_PER_YEAR};
use crate::errors::{Result, ValuationError, ValuationWarning};
use crate::utils::time_utils::{valuation_date_today, whole_calendar_months};

/// Calculates the depreciation view of `asset` as of the given date.
///
/// `as_of` earlier than the purchase date is valid and yields zero elapsed
/// months (no depreciation), never an error. An unrecognized
/// `depreciation_method` string degrades to straight line and is surfaced
/// as a [`ValuationWarning::UnknownMethod`] on the result.
pub fn calculate_depreciation(asset: &FixedAsset, as_of: NaiveDate) -> Result<DepreciationResult> {
    validate_asset(asset)?;

    let mut warnings = Vec::new();
    let method = match DepreciationMethod::from_db_str(&asset.depreciation_method) {
        Some(method) => method,
        None => {
            warn!(
                "Unknown depreciation method '{}' on asset {}; falling back to straight line",
                asset.depreciation_method, asset.id
            );
            warnings.push(ValuationWarning::UnknownMethod(
                asset.depreciation_method.clone(),
            ));
            DepreciationMethod::StraightLine
        }
    };

    let raw_months = whole_calendar_months(asset.purchase_date, as_of);
    let elapsed_months = raw_months.max(0);
    let useful_life_months = asset.useful_life_years * MONTHS_PER_YEAR;
    let depreciable_amount = asset.original_value - asset.salvage_value;

    let (accumulated, monthly_depreciation) = match method {
        DepreciationMethod::StraightLine => {
            straight_line(depreciable_amount, useful_life_months, elapsed_months)
        }
        DepreciationMethod::DecliningBalance => declining_balance(
            asset.original_value,
            depreciable_amount,
            asset.useful_life_years,
            useful_life_months,
            elapsed_months,
        ),
    };

    let current_value = asset.original_value - accumulated;
    let rate_pct = accumulated / asset.original_value * dec!(100);

    Ok(DepreciationResult {
        asset_id: asset.id.clone(),
        as_of,
        method,
        original_value: asset.original_value.round_dp(DISPLAY_DECIMAL_PRECISION),
        salvage_value: asset.salvage_value.round_dp(DISPLAY_DECIMAL_PRECISION),
        months_elapsed: elapsed_months,
        useful_life_months,
        monthly_depreciation: monthly_depreciation.round_dp(DISPLAY_DECIMAL_PRECISION),
        accumulated_depreciation: accumulated.round_dp(DISPLAY_DECIMAL_PRECISION),
        current_value: current_value.round_dp(DISPLAY_DECIMAL_PRECISION),
        depreciation_rate_pct: rate_pct.round_dp(DISPLAY_DECIMAL_PRECISION),
        remaining_life_months: (useful_life_months - elapsed_months).max(0),
        warnings,
    })
}

/// Convenience wrapper evaluating at today's valuation date (default timezone).
pub fn calculate_depreciation_today(asset: &FixedAsset) -> Result<DepreciationResult> {
    calculate_depreciation(asset, valuation_date_today())
}

/// Straight line: a fixed monthly charge over the useful life, capped at the
/// depreciable amount. Returns `(accumulated, monthly_charge)`.
fn straight_line(
    depreciable_amount: Decimal,
    useful_life_months: i32,
    elapsed_months: i32,
) -> (Decimal, Decimal) {
    let monthly = depreciable_amount / Decimal::from(useful_life_months);
    let accumulated = (monthly * Decimal::from(elapsed_months)).min(depreciable_amount);
    (accumulated, monthly)
}

/// Double-declining balance, applied monthly.
///
/// Each month charges `annual_rate / 12` of the *remaining* book value, so
/// the schedule is an explicit recurrence, not a closed form. The loop is
/// bounded by the useful life and the final total is capped at the
/// depreciable amount. Returns `(accumulated, first_month_charge)`.
fn declining_balance(
    original_value: Decimal,
    depreciable_amount: Decimal,
    useful_life_years: i32,
    useful_life_months: i32,
    elapsed_months: i32,
) -> (Decimal, Decimal) {
    let annual_rate = Decimal::from(DECLINING_BALANCE_FACTOR) / Decimal::from(useful_life_years);
    let months_per_year = Decimal::from(MONTHS_PER_YEAR);
    let first_month_charge = original_value * annual_rate / months_per_year;

    let steps = elapsed_months.min(useful_life_months);
    let mut accumulated = Decimal::zero();
    for _ in 0..steps {
        let monthly = (original_value - accumulated) * annual_rate / months_per_year;
        accumulated += monthly;
    }

    (accumulated.min(depreciable_amount), first_month_charge)
}

/// Rejects asset configurations that would make the math meaningless or
/// divide by zero. These should have been caught at record creation, so a
/// failure here is a data problem, not a computation problem.
fn validate_asset(asset: &FixedAsset) -> Result<()> {
    if asset.useful_life_years < 1 {
        return Err(ValuationError::InvalidAsset(format!(
            "asset {} has non-positive useful life ({} years)",
            asset.id, asset.useful_life_years
        ))
        .into());
    }
    if asset.original_value <= Decimal::zero() {
        return Err(ValuationError::InvalidAsset(format!(
            "asset {} has non-positive original value ({})",
            asset.id, asset.original_value
        ))
        .into());
    }
    if asset.salvage_value < Decimal::zero() {
        return Err(ValuationError::InvalidAsset(format!(
            "asset {} has negative salvage value ({})",
            asset.id, asset.salvage_value
        ))
        .into());
    }
    if asset.salvage_value >= asset.original_value {
        return Err(ValuationError::InvalidAsset(format!(
            "asset {} has salvage value ({}) >= original value ({})",
            asset.id, asset.salvage_value, asset.original_value
        ))
        .into());
    }
    Ok(())
}
