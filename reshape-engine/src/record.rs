//! FILENAME: reshape-engine/src/record.rs
//! Record model and numeric coercion.
//!
//! A `Record` is a flat mapping from column name to value, one per source
//! row. CSV parsing yields every field as text; `coerce` turns the fields a
//! chart consumes as measures into numbers, substituting 0 for anything
//! missing or unparsable. Silent zero-fallback is the defined policy here:
//! malformed numeric text never signals an error.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A single field value within a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Returns the value as a categorical key string.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format!("{}", n),
        }
    }

    /// Returns the value as a number, coercing text with zero-fallback.
    /// Surrounding whitespace is tolerated; anything unparsable becomes 0.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A flat record: one source row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub fields: FxHashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            fields: FxHashMap::default(),
        }
    }

    /// Sets a field value, replacing any previous value for that column.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns the field as a categorical key string.
    /// A missing field yields the empty string.
    pub fn text(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(|v| v.as_text())
            .unwrap_or_default()
    }

    /// Returns the field as a number with zero-fallback.
    /// Missing and non-numeric fields both yield 0.
    pub fn number(&self, field: &str) -> f64 {
        self.fields.get(field).map(|v| v.as_number()).unwrap_or(0.0)
    }
}

// ============================================================================
// COERCION
// ============================================================================

/// Returns a new record where each field named in `numeric_fields` holds a
/// number. Missing or non-numeric input coerces to 0; fields not in the set
/// pass through untouched. Idempotent: coercing an already-numeric field is
/// a no-op.
pub fn coerce(record: &Record, numeric_fields: &[&str]) -> Record {
    let mut coerced = record.clone();
    for &field in numeric_fields {
        let value = coerced.number(field);
        coerced.fields.insert(field.to_string(), FieldValue::Number(value));
    }
    coerced
}
