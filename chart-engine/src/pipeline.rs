//! FILENAME: chart-engine/src/pipeline.rs
//! Load-then-build pipelines.
//!
//! Two-stage composition per chart: an I/O stage that yields resident
//! record collections or an error, and the pure construction stage. On
//! load failure a single diagnostic is logged and the error propagates;
//! construction never runs on partial data.

use std::path::Path;
use loader::{load_csv, LoadError};
use reshape_engine::Record;
use crate::definition::{HeatmapConfig, RadialConfig, ScatterConfig};
use crate::engine::{build_heatmap, build_radial, build_scatter};
use crate::view::{HeatmapView, RadialView, ScatterView};

/// Loads the scatter source and builds its render plan.
pub fn scatter_chart(config: &ScatterConfig) -> Result<ScatterView, LoadError> {
    let records = load_source(&config.source)?;
    Ok(build_scatter(config, &records))
}

/// Loads both heatmap sources and builds the render plan. If the first
/// source fails, the second is never read.
pub fn heatmap_chart(config: &HeatmapConfig) -> Result<HeatmapView, LoadError> {
    let male_records = load_source(&config.male_source)?;
    let female_records = load_source(&config.female_source)?;
    Ok(build_heatmap(config, &male_records, &female_records))
}

/// Loads the radial source and builds its render plan.
pub fn radial_chart(config: &RadialConfig) -> Result<RadialView, LoadError> {
    let records = load_source(&config.source)?;
    Ok(build_radial(config, &records))
}

/// Loads one CSV source, logging a single diagnostic on failure.
fn load_source(path: &Path) -> Result<Vec<Record>, LoadError> {
    load_csv(path).map_err(|e| {
        log::error!("Error loading chart source {}: {}", path.display(), e);
        e
    })
}
