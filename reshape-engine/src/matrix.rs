//! FILENAME: reshape-engine/src/matrix.rs
//! Dense cross-product matrix construction.
//!
//! Materializes every (row, col) pair from two category domains exactly
//! once, looking up the matching record in each input collection. This is
//! the heatmap shape: e.g. (country x year) cells with one numeric value
//! per source file (male count, female count).
//!
//! Lookup goes through a composite-key index built once per collection
//! before the cross-product loop, O(n + m*k) instead of a repeated linear
//! scan. When a collection holds more than one record for the same key
//! pair, the first record in collection order wins; a missing match
//! defaults to 0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use crate::record::Record;

// ============================================================================
// MATRIX CELL
// ============================================================================

/// One cell of the dense cross-product matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    /// Key from the row domain (outer iteration).
    pub row: String,

    /// Key from the column domain (inner iteration).
    pub col: String,

    /// One numeric value per input collection, in collection order.
    /// 0 where the collection has no matching record.
    pub source_values: Vec<f64>,
}

// ============================================================================
// MATRIX CONSTRUCTION
// ============================================================================

/// Builds the dense matrix over the cross-product of `row_domain` and
/// `col_domain`, in row-major order (row domain outer, column domain
/// inner). Returns exactly |row_domain| * |col_domain| cells.
pub fn build_matrix(
    collections: &[&[Record]],
    row_field: &str,
    col_field: &str,
    value_field: &str,
    row_domain: &[String],
    col_domain: &[String],
) -> Vec<MatrixCell> {
    let indexes: Vec<FxHashMap<(String, String), f64>> = collections
        .iter()
        .map(|collection| index_collection(collection, row_field, col_field, value_field))
        .collect();

    let mut cells = Vec::with_capacity(row_domain.len() * col_domain.len());

    for row in row_domain {
        for col in col_domain {
            let key = (row.clone(), col.clone());
            let source_values = indexes
                .iter()
                .map(|index| index.get(&key).copied().unwrap_or(0.0))
                .collect();

            cells.push(MatrixCell {
                row: row.clone(),
                col: col.clone(),
                source_values,
            });
        }
    }

    cells
}

/// Indexes one collection by (row_field, col_field) composite key.
/// First insert wins, preserving first-match semantics for duplicate keys.
fn index_collection(
    collection: &[Record],
    row_field: &str,
    col_field: &str,
    value_field: &str,
) -> FxHashMap<(String, String), f64> {
    let mut index = FxHashMap::default();

    for record in collection {
        let key = (record.text(row_field), record.text(col_field));
        index.entry(key).or_insert_with(|| record.number(value_field));
    }

    index
}
