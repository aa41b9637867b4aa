//! Category-level aggregation of record valuations.
//!
//! One internal pass buckets every valuation into per-category stats, wires
//! the parent/child tree from the flat category list, and rolls totals up
//! through descendants. The flat table and the nested tree are projections
//! of that single pass. Stored category data is never trusted to be acyclic:
//! every descent is guarded by a visited set.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::assets::FixedAsset;
use crate::categories::{
    ActivityMetric, Category, CategoryAggregation, CategoryStats, CategoryStatsNode,
};
use crate::constants::{UNCATEGORIZED_COLOR, UNCATEGORIZED_ID, UNCATEGORIZED_NAME};
use crate::projects::Project;
use crate::valuation::{valuate_records, RecordValuation};

/// Aggregates pre-computed record valuations by category.
///
/// Records whose `category_id` matches no supplied category land in a
/// synthetic uncategorized bucket rather than being dropped, so aggregation
/// totals always equal the sum of the valuations passed in.
pub fn aggregate(
    valuations: &[RecordValuation],
    categories: &[Category],
    metric: ActivityMetric,
) -> CategoryAggregation {
    debug!(
        "Aggregating {} valuations across {} categories",
        valuations.len(),
        categories.len()
    );

    // --- 1. Seed per-category stats from the flat category list ---
    let mut stats: HashMap<String, CategoryStats> = HashMap::new();
    for category in categories {
        if stats.contains_key(&category.id) {
            warn!("Duplicate category id '{}' ignored", category.id);
            continue;
        }
        stats.insert(category.id.clone(), empty_stats(category));
    }

    // --- 2. Bucket valuations (unknown category -> synthetic bucket) ---
    for valuation in valuations {
        let bucket_id = if stats.contains_key(&valuation.category_id) {
            valuation.category_id.clone()
        } else {
            UNCATEGORIZED_ID.to_string()
        };
        let entry = stats
            .entry(bucket_id)
            .or_insert_with(uncategorized_stats);
        entry.record_count += 1;
        entry.total_original += valuation.original_amount;
        entry.total_current += valuation.current_value;
        entry.total_consumed += valuation.consumed_amount;
        *entry.status_counts.entry(valuation.status.clone()).or_insert(0) += 1;
    }

    // --- 3. Wire children by parent id ---
    // A missing or self-referencing parent demotes the category to a root.
    let mut children: HashMap<String, Vec<String>> = HashMap::new();
    let mut roots: Vec<String> = Vec::new();
    for (id, stat) in &stats {
        match &stat.parent_id {
            Some(parent_id) if parent_id != id && stats.contains_key(parent_id) => {
                children
                    .entry(parent_id.clone())
                    .or_default()
                    .push(id.clone());
            }
            _ => roots.push(id.clone()),
        }
    }
    roots.sort();
    for child_ids in children.values_mut() {
        child_ids.sort();
    }

    // --- 4. Roll totals up through descendants, cycle-safe ---
    let mut visited: HashSet<String> = HashSet::new();
    let mut rollups: HashMap<String, Rollup> = HashMap::new();
    for root in &roots {
        roll_up(root, &children, &stats, &mut visited, &mut rollups);
    }
    // Categories only reachable through a cycle have no root; promote each
    // unvisited one (deterministically, by id) so it still appears once.
    let mut leftovers: Vec<String> = stats
        .keys()
        .filter(|id| !visited.contains(*id))
        .cloned()
        .collect();
    leftovers.sort();
    for id in &leftovers {
        if !visited.contains(id) {
            warn!("Category '{}' is part of a parent cycle; treating as root", id);
            roll_up(id, &children, &stats, &mut visited, &mut rollups);
            roots.push(id.clone());
        }
    }
    for (id, rollup) in &rollups {
        if let Some(stat) = stats.get_mut(id) {
            stat.rollup_record_count = rollup.record_count;
            stat.rollup_original = rollup.original;
            stat.rollup_current = rollup.current;
            stat.rollup_consumed = rollup.consumed;
        }
    }

    // --- 5. Project the one pass into both output shapes ---
    let mut table: Vec<CategoryStats> = stats.values().cloned().collect();
    sort_stats(&mut table, metric);

    let mut tree_visited: HashSet<String> = HashSet::new();
    let mut tree: Vec<CategoryStatsNode> = roots
        .iter()
        .filter_map(|id| build_node(id, &children, &stats, metric, &mut tree_visited))
        .collect();
    tree.sort_by(|a, b| compare_stats(&a.stats, &b.stats, metric));

    CategoryAggregation {
        metric,
        table,
        tree,
        skipped: Vec::new(),
    }
}

/// Valuates raw records at `as_of` and aggregates the results by category.
///
/// Composes the batch valuator with [`aggregate`]; records whose valuation
/// failed are carried through in `skipped` instead of aborting the call.
pub fn aggregate_records(
    assets: &[FixedAsset],
    projects: &[Project],
    categories: &[Category],
    as_of: DateTime<Utc>,
    metric: ActivityMetric,
) -> CategoryAggregation {
    let batch = valuate_records(assets, projects, as_of);
    let mut aggregation = aggregate(&batch.valuations, categories, metric);
    aggregation.skipped = batch.skipped;
    aggregation
}

#[derive(Clone, Copy)]
struct Rollup {
    record_count: u32,
    original: Decimal,
    current: Decimal,
    consumed: Decimal,
}

/// Post-order descent accumulating own + descendant totals. A category is
/// never visited twice, so cyclic parent data terminates.
fn roll_up(
    id: &str,
    children: &HashMap<String, Vec<String>>,
    stats: &HashMap<String, CategoryStats>,
    visited: &mut HashSet<String>,
    rollups: &mut HashMap<String, Rollup>,
) -> Rollup {
    if !visited.insert(id.to_string()) {
        // Already counted elsewhere; contribute nothing to this branch.
        return Rollup {
            record_count: 0,
            original: Decimal::zero(),
            current: Decimal::zero(),
            consumed: Decimal::zero(),
        };
    }

    let own = &stats[id];
    let mut total = Rollup {
        record_count: own.record_count,
        original: own.total_original,
        current: own.total_current,
        consumed: own.total_consumed,
    };
    if let Some(child_ids) = children.get(id) {
        for child_id in child_ids {
            let child = roll_up(child_id, children, stats, visited, rollups);
            total.record_count += child.record_count;
            total.original += child.original;
            total.current += child.current;
            total.consumed += child.consumed;
        }
    }
    rollups.insert(id.to_string(), total);
    total
}

/// Clones a category's stats into a tree node with its children nested,
/// applying the same ordering at every level.
fn build_node(
    id: &str,
    children: &HashMap<String, Vec<String>>,
    stats: &HashMap<String, CategoryStats>,
    metric: ActivityMetric,
    visited: &mut HashSet<String>,
) -> Option<CategoryStatsNode> {
    if !visited.insert(id.to_string()) {
        return None;
    }
    let mut child_nodes: Vec<CategoryStatsNode> = children
        .get(id)
        .map(|ids| {
            ids.iter()
                .filter_map(|child_id| build_node(child_id, children, stats, metric, visited))
                .collect()
        })
        .unwrap_or_default();
    child_nodes.sort_by(|a, b| compare_stats(&a.stats, &b.stats, metric));

    Some(CategoryStatsNode {
        stats: stats[id].clone(),
        children: child_nodes,
    })
}

fn sort_stats(table: &mut [CategoryStats], metric: ActivityMetric) {
    table.sort_by(|a, b| compare_stats(a, b, metric));
}

/// Activity metric descending, category id ascending on ties — ordering must
/// be stable for identical inputs.
fn compare_stats(
    a: &CategoryStats,
    b: &CategoryStats,
    metric: ActivityMetric,
) -> std::cmp::Ordering {
    metric_value(b, metric)
        .cmp(&metric_value(a, metric))
        .then_with(|| a.category_id.cmp(&b.category_id))
}

fn metric_value(stats: &CategoryStats, metric: ActivityMetric) -> Decimal {
    match metric {
        ActivityMetric::RecordCount => Decimal::from(stats.rollup_record_count),
        ActivityMetric::ConsumedValue => stats.rollup_consumed,
    }
}

fn empty_stats(category: &Category) -> CategoryStats {
    CategoryStats {
        category_id: category.id.clone(),
        name: category.name.clone(),
        color: category.color.clone(),
        parent_id: category.parent_id.clone(),
        record_count: 0,
        total_original: Decimal::zero(),
        total_current: Decimal::zero(),
        total_consumed: Decimal::zero(),
        status_counts: HashMap::new(),
        rollup_record_count: 0,
        rollup_original: Decimal::zero(),
        rollup_current: Decimal::zero(),
        rollup_consumed: Decimal::zero(),
    }
}

fn uncategorized_stats() -> CategoryStats {
    empty_stats(&Category {
        id: UNCATEGORIZED_ID.to_string(),
        name: UNCATEGORIZED_NAME.to_string(),
        color: UNCATEGORIZED_COLOR.to_string(),
        parent_id: None,
    })
}
