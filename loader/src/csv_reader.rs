//! FILENAME: loader/src/csv_reader.rs

use crate::LoadError;
use csv::ReaderBuilder;
use reshape_engine::{FieldValue, Record};
use std::fs::File;
use std::path::Path;

/// Loads a headed CSV file into a record collection.
///
/// Every field lands as `FieldValue::Text`; numeric coercion is the
/// reshaper's job. The first row supplies the column names, consumed
/// as-is without renaming. Rows shorter than the header are padded with
/// empty fields. An empty file yields an empty collection, not an error.
pub fn load_csv(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (i, name) in headers.iter().enumerate() {
            let value = row.get(i).unwrap_or("");
            record
                .fields
                .insert(name.clone(), FieldValue::Text(value.to_string()));
        }
        records.push(record);
    }

    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
