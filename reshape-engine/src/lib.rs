//! FILENAME: reshape-engine/src/lib.rs
//! Tabular reshaping core.
//!
//! This crate converts sparse, long-form record collections (e.g. rows of
//! Country / Year / Value parsed from CSV) into the dense structures the
//! chart builders need. It performs no I/O and holds no state: every
//! operation is a pure function over already-resident collections.
//!
//! Layers:
//! - `record`: Record model and numeric coercion (text -> number, 0 on failure)
//! - `domain`: Category domains (deduplicated values in first-appearance order)
//! - `matrix`: Dense cross-product matrix construction (heatmap shape)
//! - `stack`: Per-year pivoting and cumulative band stacking (radial shape)

pub mod record;
pub mod domain;
pub mod matrix;
pub mod stack;

#[cfg(test)]
mod tests;

pub use record::{coerce, FieldValue, Record};
pub use domain::distinct_domain;
pub use matrix::{build_matrix, MatrixCell};
pub use stack::{pivot_by_year, stack, Band, StackedSeries, YearRecord};
