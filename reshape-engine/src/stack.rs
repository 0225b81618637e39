//! FILENAME: reshape-engine/src/stack.rs
//! Per-year pivoting and cumulative band stacking.
//!
//! This is the radial chart shape: long-form (year, category, value) rows
//! pivot into one record per year with a numeric field per category, and
//! those records then stack into cumulative bands in a fixed category
//! order. For any single year the bands partition [0, total] with no gaps
//! or overlaps.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use crate::record::Record;
use crate::domain::distinct_domain;

// ============================================================================
// PER-YEAR AGGREGATE RECORD
// ============================================================================

/// One output record per distinct year: a numeric field per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// The year key.
    pub year: String,

    /// Value per category key. Categories the pivot domain named are
    /// always present, with 0 where no record matched.
    pub values: FxHashMap<String, f64>,
}

impl YearRecord {
    /// The value for one category, 0 when absent.
    pub fn value(&self, category: &str) -> f64 {
        self.values.get(category).copied().unwrap_or(0.0)
    }

    /// Sum of all category values for this year.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}

// ============================================================================
// STACKED BANDS
// ============================================================================

/// One cumulative band: the span a single category occupies for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub year: String,
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    /// The value this band represents (its height).
    pub fn height(&self) -> f64 {
        self.upper - self.lower
    }
}

/// All bands for one category across the years, in year order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedSeries {
    pub category: String,
    pub bands: Vec<Band>,
}

// ============================================================================
// PIVOT
// ============================================================================

/// Pivots long-form records into one `YearRecord` per distinct value of
/// `year_field`, in first-appearance order. For each category in
/// `category_domain` the matching record's value is coerced numerically;
/// a missing (year, category) pair yields 0, and the first matching record
/// wins when duplicates exist.
pub fn pivot_by_year(
    records: &[Record],
    year_field: &str,
    category_field: &str,
    value_field: &str,
    category_domain: &[String],
) -> Vec<YearRecord> {
    let years = distinct_domain(&[records], year_field);

    // Composite-key index, first insert wins (same policy as build_matrix).
    let mut index: FxHashMap<(String, String), f64> = FxHashMap::default();
    for record in records {
        let key = (record.text(year_field), record.text(category_field));
        index.entry(key).or_insert_with(|| record.number(value_field));
    }

    years
        .into_iter()
        .map(|year| {
            let values = category_domain
                .iter()
                .map(|category| {
                    let key = (year.clone(), category.clone());
                    let value = index.get(&key).copied().unwrap_or(0.0);
                    (category.clone(), value)
                })
                .collect();
            YearRecord { year, values }
        })
        .collect()
}

// ============================================================================
// STACKING
// ============================================================================

/// Stacks per-year records into cumulative bands, one series per category
/// in `category_domain` order (band order follows the supplied ordering,
/// not the records' field layout). Output groups by category first, then
/// year, matching the ordering layered rendering needs.
pub fn stack(per_year: &[YearRecord], category_domain: &[String]) -> Vec<StackedSeries> {
    category_domain
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let bands = per_year
                .iter()
                .map(|record| {
                    let lower: f64 = category_domain[..i]
                        .iter()
                        .map(|earlier| record.value(earlier))
                        .sum();
                    Band {
                        year: record.year.clone(),
                        lower,
                        upper: lower + record.value(category),
                    }
                })
                .collect();

            StackedSeries {
                category: category.clone(),
                bands,
            }
        })
        .collect()
}
