//! FILENAME: loader/src/lib.rs
//! CSV ingestion.
//!
//! Turns CSV files on disk into resident record collections for the
//! reshaping core. This is the only I/O stage in the system: everything
//! downstream operates on the collections returned here. A source that
//! fails to load surfaces a single `LoadError`; there is no retry and no
//! partial-data fallback.

mod error;
mod csv_reader;

pub use error::LoadError;
pub use csv_reader::load_csv;
