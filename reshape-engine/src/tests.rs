//! FILENAME: reshape-engine/src/tests.rs
//! PURPOSE: Consolidated unit tests for the reshaping core.

use crate::domain::distinct_domain;
use crate::matrix::build_matrix;
use crate::record::{coerce, FieldValue, Record};
use crate::stack::{pivot_by_year, stack};

/// Builds a (Country, Year, Value) record from string fields.
fn long_record(country: &str, year: &str, value: &str) -> Record {
    let mut record = Record::new();
    record.set("Country", country);
    record.set("Year", year);
    record.set("Value", value);
    record
}

// ========================================
// COERCION TESTS
// ========================================

#[test]
fn coerce_parses_numeric_text() {
    let mut record = Record::new();
    record.set("Value", "5");
    let coerced = coerce(&record, &["Value"]);
    assert_eq!(coerced.get("Value"), Some(&FieldValue::Number(5.0)));
}

#[test]
fn coerce_malformed_text_yields_zero() {
    let mut record = Record::new();
    record.set("Value", "abc");
    let coerced = coerce(&record, &["Value"]);
    assert_eq!(coerced.get("Value"), Some(&FieldValue::Number(0.0)));
}

#[test]
fn coerce_missing_field_yields_zero_twice() {
    let record = Record::new();
    let once = coerce(&record, &["Value"]);
    assert_eq!(once.get("Value"), Some(&FieldValue::Number(0.0)));
    let twice = coerce(&once, &["Value"]);
    assert_eq!(twice.get("Value"), Some(&FieldValue::Number(0.0)));
}

#[test]
fn coerce_is_idempotent_on_numbers() {
    let mut record = Record::new();
    record.set("Value", 42.5);
    let coerced = coerce(&record, &["Value"]);
    assert_eq!(coerced, coerce(&coerced, &["Value"]));
    assert_eq!(coerced.get("Value"), Some(&FieldValue::Number(42.5)));
}

#[test]
fn coerce_leaves_other_fields_untouched() {
    let record = long_record("Sweden", "2000", "7");
    let coerced = coerce(&record, &["Value"]);
    assert_eq!(coerced.get("Country"), Some(&FieldValue::Text("Sweden".to_string())));
    assert_eq!(coerced.get("Year"), Some(&FieldValue::Text("2000".to_string())));
}

#[test]
fn coerce_tolerates_surrounding_whitespace() {
    let mut record = Record::new();
    record.set("Value", "  12.5 ");
    let coerced = coerce(&record, &["Value"]);
    assert_eq!(coerced.get("Value"), Some(&FieldValue::Number(12.5)));
}

#[test]
fn record_number_falls_back_to_zero() {
    let mut record = Record::new();
    record.set("Value", "n/a");
    assert_eq!(record.number("Value"), 0.0);
    assert_eq!(record.number("Missing"), 0.0);
}

// ========================================
// CATEGORY DOMAIN TESTS
// ========================================

#[test]
fn distinct_domain_preserves_first_appearance_order() {
    let records = vec![
        long_record("B", "2000", "1"),
        long_record("A", "2001", "2"),
        long_record("B", "2002", "3"),
        long_record("C", "2000", "4"),
    ];
    let domain = distinct_domain(&[&records], "Country");
    assert_eq!(domain, vec!["B", "A", "C"]);
}

#[test]
fn distinct_domain_unions_collections_in_order() {
    let first = vec![long_record("A", "2000", "1"), long_record("B", "2001", "2")];
    let second = vec![long_record("B", "2000", "3"), long_record("C", "2001", "4")];
    let domain = distinct_domain(&[&first, &second], "Country");
    assert_eq!(domain, vec!["A", "B", "C"]);
}

#[test]
fn distinct_domain_has_no_duplicates() {
    let records = vec![
        long_record("A", "2000", "1"),
        long_record("A", "2000", "2"),
        long_record("A", "2001", "3"),
    ];
    let years = distinct_domain(&[&records], "Year");
    assert_eq!(years, vec!["2000", "2001"]);
}

#[test]
fn distinct_domain_of_empty_collections_is_empty() {
    let records: Vec<Record> = Vec::new();
    assert!(distinct_domain(&[&records], "Country").is_empty());
}

// ========================================
// MATRIX TESTS
// ========================================

#[test]
fn matrix_merges_two_sources_into_one_cell() {
    let male = vec![long_record("A", "2000", "5")];
    let female = vec![long_record("A", "2000", "3")];
    let rows = vec!["A".to_string()];
    let cols = vec!["2000".to_string()];

    let cells = build_matrix(&[&male, &female], "Country", "Year", "Value", &rows, &cols);

    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].row, "A");
    assert_eq!(cells[0].col, "2000");
    assert_eq!(cells[0].source_values, vec![5.0, 3.0]);
}

#[test]
fn matrix_missing_source_defaults_to_zero() {
    let male = vec![long_record("A", "2000", "5")];
    let female: Vec<Record> = Vec::new();
    let rows = vec!["A".to_string()];
    let cols = vec!["2000".to_string()];

    let cells = build_matrix(&[&male, &female], "Country", "Year", "Value", &rows, &cols);

    assert_eq!(cells[0].source_values, vec![5.0, 0.0]);
}

#[test]
fn matrix_is_exhaustive_over_cross_product() {
    let records = vec![
        long_record("A", "2000", "1"),
        long_record("B", "2001", "2"),
    ];
    let rows = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let cols = vec!["2000".to_string(), "2001".to_string()];

    let cells = build_matrix(&[&records], "Country", "Year", "Value", &rows, &cols);

    assert_eq!(cells.len(), rows.len() * cols.len());
    for row in &rows {
        for col in &cols {
            let count = cells.iter().filter(|c| &c.row == row && &c.col == col).count();
            assert_eq!(count, 1, "pair ({}, {}) must appear exactly once", row, col);
        }
    }
}

#[test]
fn matrix_iterates_row_major() {
    let records: Vec<Record> = Vec::new();
    let rows = vec!["A".to_string(), "B".to_string()];
    let cols = vec!["2000".to_string(), "2001".to_string()];

    let cells = build_matrix(&[&records], "Country", "Year", "Value", &rows, &cols);

    let order: Vec<(&str, &str)> = cells.iter().map(|c| (c.row.as_str(), c.col.as_str())).collect();
    assert_eq!(
        order,
        vec![("A", "2000"), ("A", "2001"), ("B", "2000"), ("B", "2001")]
    );
}

#[test]
fn matrix_first_match_wins_on_duplicates() {
    let records = vec![
        long_record("A", "2000", "5"),
        long_record("A", "2000", "9"),
    ];
    let rows = vec!["A".to_string()];
    let cols = vec!["2000".to_string()];

    let cells = build_matrix(&[&records], "Country", "Year", "Value", &rows, &cols);

    assert_eq!(cells[0].source_values, vec![5.0]);
}

#[test]
fn matrix_coerces_malformed_values_to_zero() {
    let records = vec![long_record("A", "2000", "oops")];
    let rows = vec!["A".to_string()];
    let cols = vec!["2000".to_string()];

    let cells = build_matrix(&[&records], "Country", "Year", "Value", &rows, &cols);

    assert_eq!(cells[0].source_values, vec![0.0]);
}

// ========================================
// PIVOT TESTS
// ========================================

#[test]
fn pivot_produces_one_record_per_year() {
    let records = vec![
        long_record("A", "2000", "2"),
        long_record("B", "2000", "3"),
        long_record("A", "2001", "4"),
    ];
    let countries = vec!["A".to_string(), "B".to_string()];

    let per_year = pivot_by_year(&records, "Year", "Country", "Value", &countries);

    assert_eq!(per_year.len(), 2);
    assert_eq!(per_year[0].year, "2000");
    assert_eq!(per_year[0].value("A"), 2.0);
    assert_eq!(per_year[0].value("B"), 3.0);
    assert_eq!(per_year[1].year, "2001");
    assert_eq!(per_year[1].value("A"), 4.0);
    assert_eq!(per_year[1].value("B"), 0.0);
}

#[test]
fn pivot_year_order_follows_first_appearance() {
    let records = vec![
        long_record("A", "2005", "1"),
        long_record("A", "2001", "2"),
        long_record("A", "2005", "3"),
    ];
    let countries = vec!["A".to_string()];

    let per_year = pivot_by_year(&records, "Year", "Country", "Value", &countries);

    let years: Vec<&str> = per_year.iter().map(|r| r.year.as_str()).collect();
    assert_eq!(years, vec!["2005", "2001"]);
}

#[test]
fn pivot_total_sums_category_values() {
    let records = vec![
        long_record("A", "2000", "2"),
        long_record("B", "2000", "3.5"),
    ];
    let countries = vec!["A".to_string(), "B".to_string()];

    let per_year = pivot_by_year(&records, "Year", "Country", "Value", &countries);
    assert_eq!(per_year[0].total(), 5.5);
}

// ========================================
// STACKING TESTS
// ========================================

#[test]
fn stack_builds_cumulative_bands() {
    let records = vec![
        long_record("A", "2000", "2"),
        long_record("B", "2000", "3"),
    ];
    let countries = vec!["A".to_string(), "B".to_string()];
    let per_year = pivot_by_year(&records, "Year", "Country", "Value", &countries);

    let series = stack(&per_year, &countries);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].category, "A");
    assert_eq!(series[0].bands[0].lower, 0.0);
    assert_eq!(series[0].bands[0].upper, 2.0);
    assert_eq!(series[1].category, "B");
    assert_eq!(series[1].bands[0].lower, 2.0);
    assert_eq!(series[1].bands[0].upper, 5.0);
}

#[test]
fn stack_partitions_year_total_without_gaps() {
    let records = vec![
        long_record("A", "2000", "1"),
        long_record("B", "2000", "4"),
        long_record("C", "2000", "2.5"),
        long_record("A", "2001", "3"),
        long_record("C", "2001", "6"),
    ];
    let countries = distinct_domain(&[&records], "Country");
    let per_year = pivot_by_year(&records, "Year", "Country", "Value", &countries);

    let series = stack(&per_year, &countries);

    for (year_idx, record) in per_year.iter().enumerate() {
        // Adjacent series meet exactly: upper of i == lower of i+1.
        for pair in series.windows(2) {
            assert_eq!(pair[0].bands[year_idx].upper, pair[1].bands[year_idx].lower);
        }
        let last = series.last().unwrap();
        assert_eq!(last.bands[year_idx].upper, record.total());
        assert_eq!(series[0].bands[year_idx].lower, 0.0);
    }
}

#[test]
fn stack_band_order_follows_supplied_domain() {
    let records = vec![
        long_record("B", "2000", "3"),
        long_record("A", "2000", "2"),
    ];
    // Pivot against data order, stack against a different ordering: band
    // order must follow the ordering given to stack.
    let data_order = distinct_domain(&[&records], "Country");
    assert_eq!(data_order, vec!["B", "A"]);
    let per_year = pivot_by_year(&records, "Year", "Country", "Value", &data_order);

    let ordering = vec!["A".to_string(), "B".to_string()];
    let series = stack(&per_year, &ordering);

    assert_eq!(series[0].category, "A");
    assert_eq!(series[0].bands[0].upper, 2.0);
    assert_eq!(series[1].category, "B");
    assert_eq!(series[1].bands[0].lower, 2.0);
    assert_eq!(series[1].bands[0].upper, 5.0);
}

#[test]
fn stack_of_empty_input_is_empty_series() {
    let series = stack(&[], &["A".to_string()]);
    assert_eq!(series.len(), 1);
    assert!(series[0].bands.is_empty());
}

#[test]
fn band_height_recovers_value() {
    let records = vec![
        long_record("A", "2000", "2"),
        long_record("B", "2000", "3"),
    ];
    let countries = vec!["A".to_string(), "B".to_string()];
    let per_year = pivot_by_year(&records, "Year", "Country", "Value", &countries);
    let series = stack(&per_year, &countries);

    assert_eq!(series[0].bands[0].height(), 2.0);
    assert_eq!(series[1].bands[0].height(), 3.0);
}

// ========================================
// SERIALIZATION TESTS
// ========================================

#[test]
fn matrix_cell_roundtrips_through_json() {
    let male = vec![long_record("A", "2000", "5")];
    let rows = vec!["A".to_string()];
    let cols = vec!["2000".to_string()];
    let cells = build_matrix(&[&male], "Country", "Year", "Value", &rows, &cols);

    let json = serde_json::to_string(&cells).unwrap();
    let back: Vec<crate::matrix::MatrixCell> = serde_json::from_str(&json).unwrap();
    assert_eq!(cells, back);
}
