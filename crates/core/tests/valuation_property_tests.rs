//! Property-based tests for the valuation engine.
//!
//! These verify the universal guarantees — capping, monotonicity, value
//! conservation, status boundaries, and aggregation consistency — across
//! randomly generated records, using the `proptest` crate.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use worthwatch_core::assets::{calculate_depreciation, AssetStatus, FixedAsset};
use worthwatch_core::categories::{aggregate, ActivityMetric, Category};
use worthwatch_core::projects::{valuate_project, Project, ProjectStatus};
use worthwatch_core::valuation::{RecordKind, RecordValuation};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
}

// =============================================================================
// Generators
// =============================================================================

/// Generates a fixed asset with a valid configuration: positive original
/// value, salvage strictly below it, life 1-30 years.
fn arb_asset() -> impl Strategy<Value = FixedAsset> {
    (
        1_000i64..500_000_000,
        0u32..90,
        1i32..=30,
        0i64..3650,
        prop_oneof![Just("STRAIGHT_LINE"), Just("DECLINING_BALANCE")],
    )
        .prop_map(
            |(original_cents, salvage_pct, life_years, purchase_offset, method)| {
                let original_value = Decimal::new(original_cents, 2);
                let salvage_value =
                    (original_value * Decimal::from(salvage_pct) / dec!(100)).round_dp(2);
                FixedAsset {
                    id: "asset-prop".to_string(),
                    name: "Generated asset".to_string(),
                    category_id: "cat-0".to_string(),
                    original_value,
                    salvage_value,
                    purchase_date: base_date() + Duration::days(purchase_offset),
                    useful_life_years: life_years,
                    depreciation_method: method.to_string(),
                    status: AssetStatus::InUse,
                    notes: None,
                }
            },
        )
}

/// Generates a project with a valid window of 1-2000 whole days.
fn arb_project() -> impl Strategy<Value = Project> {
    (100i64..1_000_000_000, 1i64..2000, 0i64..3650).prop_map(
        |(total_cents, window_days, start_offset)| {
            let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap()
                + Duration::days(start_offset);
            Project {
                id: "proj-prop".to_string(),
                name: "Generated project".to_string(),
                category_id: "cat-0".to_string(),
                total_amount: Decimal::new(total_cents, 2),
                start_time: start,
                end_time: start + Duration::days(window_days),
                purchase_time: None,
                notes: None,
            }
        },
    )
}

/// Generates a record valuation against a small fixed category pool
/// (including ids with no matching category).
fn arb_record_valuation() -> impl Strategy<Value = RecordValuation> {
    (
        prop_oneof![
            Just("cat-root"),
            Just("cat-mid"),
            Just("cat-leaf"),
            Just("cat-other"),
            Just("cat-ghost"),
        ],
        1i64..100_000_00,
        0u32..=100,
        prop_oneof![Just("IN_USE"), Just("ACTIVE"), Just("EXPIRED")],
        0u64..1_000_000,
    )
        .prop_map(|(category_id, original_cents, consumed_pct, status, nonce)| {
            let original = Decimal::new(original_cents, 2);
            let consumed = (original * Decimal::from(consumed_pct) / dec!(100)).round_dp(2);
            RecordValuation {
                record_id: format!("rec-{}", nonce),
                name: "Generated record".to_string(),
                kind: RecordKind::FixedAsset,
                category_id: category_id.to_string(),
                status: status.to_string(),
                original_amount: original,
                consumed_amount: consumed,
                current_value: original - consumed,
                warnings: Vec::new(),
            }
        })
}

fn category_pool() -> Vec<Category> {
    let cat = |id: &str, parent: Option<&str>| Category {
        id: id.to_string(),
        name: id.to_string(),
        color: "#808080".to_string(),
        parent_id: parent.map(|p| p.to_string()),
    };
    vec![
        cat("cat-root", None),
        cat("cat-mid", Some("cat-root")),
        cat("cat-leaf", Some("cat-mid")),
        cat("cat-other", None),
    ]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Accumulated depreciation stays within `[0, original - salvage]` for
    /// any evaluation date, including dates before purchase and far past the
    /// end of the useful life, under both methods.
    #[test]
    fn prop_accumulated_depreciation_is_capped(
        asset in arb_asset(),
        offset_days in -500i64..15_000,
    ) {
        let as_of = asset.purchase_date + Duration::days(offset_days);
        let result = calculate_depreciation(&asset, as_of).unwrap();

        let depreciable = asset.original_value - asset.salvage_value;
        prop_assert!(result.accumulated_depreciation >= Decimal::ZERO);
        prop_assert!(
            result.accumulated_depreciation <= depreciable.round_dp(2) + dec!(0.01),
            "accumulated {} exceeds depreciable {}",
            result.accumulated_depreciation,
            depreciable
        );
        prop_assert!(result.current_value >= asset.salvage_value.round_dp(2) - dec!(0.01));
    }

    /// Current value never increases as the evaluation date advances.
    #[test]
    fn prop_current_value_is_non_increasing(
        asset in arb_asset(),
        offset_a in -100i64..12_000,
        offset_b in -100i64..12_000,
    ) {
        let (early, late) = if offset_a <= offset_b {
            (offset_a, offset_b)
        } else {
            (offset_b, offset_a)
        };
        let v_early = calculate_depreciation(&asset, asset.purchase_date + Duration::days(early))
            .unwrap()
            .current_value;
        let v_late = calculate_depreciation(&asset, asset.purchase_date + Duration::days(late))
            .unwrap()
            .current_value;

        prop_assert!(v_late <= v_early, "value rose from {} to {}", v_early, v_late);
    }

    /// Used cost and remaining value always conserve the total amount within
    /// one cent, in every lifecycle state.
    #[test]
    fn prop_project_value_is_conserved(
        project in arb_project(),
        offset_hours in -4800i64..52_800,
    ) {
        let as_of = project.start_time + Duration::hours(offset_hours);
        let valuation = valuate_project(&project, as_of).unwrap();

        let drift = (valuation.used_cost + valuation.remaining_value
            - project.total_amount.round_dp(2))
        .abs();
        prop_assert!(drift <= dec!(0.01), "conservation drift {}", drift);
    }

    /// Status is exactly determined by the instant versus the window, and
    /// the terminal states pin progress to their extremes.
    #[test]
    fn prop_project_status_matches_window(
        project in arb_project(),
        offset_hours in -4800i64..52_800,
    ) {
        let as_of = project.start_time + Duration::hours(offset_hours);
        let valuation = valuate_project(&project, as_of).unwrap();

        let expected = if as_of < project.start_time {
            ProjectStatus::NotStarted
        } else if as_of > project.end_time {
            ProjectStatus::Expired
        } else {
            ProjectStatus::Active
        };
        prop_assert_eq!(valuation.status, expected);

        match valuation.status {
            ProjectStatus::NotStarted => {
                prop_assert_eq!(valuation.progress_pct, dec!(0));
                prop_assert_eq!(valuation.used_cost, dec!(0));
            }
            ProjectStatus::Expired => {
                prop_assert_eq!(valuation.progress_pct, dec!(100));
                prop_assert_eq!(valuation.remaining_value, dec!(0));
            }
            ProjectStatus::Active => {
                prop_assert!(valuation.progress_pct >= dec!(0));
                prop_assert!(valuation.progress_pct <= dec!(100));
            }
        }
    }

    /// Progress never regresses as the evaluation instant advances,
    /// including across status transitions.
    #[test]
    fn prop_project_progress_is_monotone(
        project in arb_project(),
        offset_a in -2400i64..50_000,
        offset_b in -2400i64..50_000,
    ) {
        let (early, late) = if offset_a <= offset_b {
            (offset_a, offset_b)
        } else {
            (offset_b, offset_a)
        };
        let p_early = valuate_project(&project, project.start_time + Duration::hours(early))
            .unwrap()
            .progress_pct;
        let p_late = valuate_project(&project, project.start_time + Duration::hours(late))
            .unwrap()
            .progress_pct;

        prop_assert!(p_late >= p_early, "progress fell from {} to {}", p_early, p_late);
    }

    /// Aggregation is lossless: the flat table's own-totals sum to exactly
    /// the sum of the valuations passed in (unknown categories included via
    /// the synthetic bucket), and repeated runs produce identical output.
    #[test]
    fn prop_aggregation_is_lossless_and_deterministic(
        valuations in proptest::collection::vec(arb_record_valuation(), 0..60),
    ) {
        let categories = category_pool();
        let result = aggregate(&valuations, &categories, ActivityMetric::ConsumedValue);

        let input_original: Decimal = valuations.iter().map(|v| v.original_amount).sum();
        let input_current: Decimal = valuations.iter().map(|v| v.current_value).sum();
        let table_original: Decimal = result.table.iter().map(|s| s.total_original).sum();
        let table_current: Decimal = result.table.iter().map(|s| s.total_current).sum();
        prop_assert_eq!(input_original, table_original);
        prop_assert_eq!(input_current, table_current);

        let record_total: usize = result.table.iter().map(|s| s.record_count as usize).sum();
        prop_assert_eq!(record_total, valuations.len());

        // Root rollups cover everything exactly once.
        let rollup_original: Decimal = result.tree.iter().map(|n| n.stats.rollup_original).sum();
        prop_assert_eq!(rollup_original, input_original);

        let again = aggregate(&valuations, &categories, ActivityMetric::ConsumedValue);
        prop_assert_eq!(result, again);
    }
}
