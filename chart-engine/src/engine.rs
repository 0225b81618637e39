//! FILENAME: chart-engine/src/engine.rs
//! Chart construction engine.
//!
//! Pure builders from record collections to render plans. Each builder
//! mirrors one chart's reshaping:
//! 1. Scatter: coerce the numeric columns, pass rows through as points
//! 2. Heatmap: union domains from both sources, build the dense matrix
//! 3. Radial: pivot by year over the country domain, stack into bands
//!
//! Builders are total: malformed numbers become 0, missing matches become
//! 0, and empty inputs produce empty views with zeroed domains.

use reshape_engine::{build_matrix, coerce, distinct_domain, pivot_by_year, stack, Record};
use crate::definition::{HeatmapConfig, RadialConfig, ScatterConfig};
use crate::view::{AxisDomain, HeatmapCell, HeatmapView, RadialView, ScatterPoint, ScatterView};

// ============================================================================
// SCATTER
// ============================================================================

/// Builds the scatter render plan: a type-coerced pass-through of the
/// source rows plus the axis domains derived from them.
pub fn build_scatter(config: &ScatterConfig, records: &[Record]) -> ScatterView {
    let numeric_fields = [config.year_field.as_str(), config.value_field.as_str()];

    let points: Vec<ScatterPoint> = records
        .iter()
        .map(|record| {
            let coerced = coerce(record, &numeric_fields);
            ScatterPoint {
                country: coerced.text(&config.country_field),
                year: coerced.number(&config.year_field),
                count: coerced.number(&config.value_field),
            }
        })
        .collect();

    let x_domain = extent(points.iter().map(|p| p.year));
    let y_max = points.iter().map(|p| p.count).fold(0.0, f64::max);

    ScatterView {
        x_domain,
        y_domain: AxisDomain::from_zero(y_max),
        plot_width: config.margins.inner_width(&config.dimensions),
        plot_height: config.margins.inner_height(&config.dimensions),
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        points,
    }
}

/// Minimum and maximum of a value sequence; [0, 0] when empty.
fn extent(values: impl Iterator<Item = f64>) -> AxisDomain {
    let mut domain: Option<AxisDomain> = None;
    for value in values {
        domain = Some(match domain {
            None => AxisDomain { min: value, max: value },
            Some(d) => AxisDomain {
                min: d.min.min(value),
                max: d.max.max(value),
            },
        });
    }
    domain.unwrap_or(AxisDomain { min: 0.0, max: 0.0 })
}

// ============================================================================
// HEATMAP
// ============================================================================

/// Builds the heatmap render plan from two sources (male, female). The
/// country and year domains are the union of both sources' distinct
/// values; every cell in the cross-product exists, with 0 where a source
/// has no matching record.
pub fn build_heatmap(
    config: &HeatmapConfig,
    male_records: &[Record],
    female_records: &[Record],
) -> HeatmapView {
    let sources: [&[Record]; 2] = [male_records, female_records];
    let countries = distinct_domain(&sources, &config.country_field);
    let years = distinct_domain(&sources, &config.year_field);

    let cells: Vec<HeatmapCell> = build_matrix(
        &sources,
        &config.country_field,
        &config.year_field,
        &config.value_field,
        &countries,
        &years,
    )
    .into_iter()
    .map(|cell| HeatmapCell {
        country: cell.row,
        year: cell.col,
        male_count: cell.source_values[0],
        female_count: cell.source_values[1],
    })
    .collect();

    let color_max = cells
        .iter()
        .map(|c| c.male_count.max(c.female_count))
        .fold(0.0, f64::max);

    HeatmapView {
        cells,
        x_domain: years,
        y_domain: countries,
        color_max,
        plot_width: config.margins.inner_width(&config.dimensions),
        plot_height: config.margins.inner_height(&config.dimensions),
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
    }
}

// ============================================================================
// RADIAL
// ============================================================================

/// Builds the radial stacked bar render plan: one stacked series per
/// country, wrapped around the angular year domain.
pub fn build_radial(config: &RadialConfig, records: &[Record]) -> RadialView {
    let years = distinct_domain(&[records], &config.year_field);
    let countries = distinct_domain(&[records], &config.country_field);

    let per_year = pivot_by_year(
        records,
        &config.year_field,
        &config.country_field,
        &config.value_field,
        &countries,
    );
    let series = stack(&per_year, &countries);

    // The last series' upper bounds are the year totals.
    let radius_max = series
        .last()
        .map(|s| s.bands.iter().map(|b| b.upper).fold(0.0, f64::max))
        .unwrap_or(0.0);

    RadialView {
        series,
        angle_domain: years,
        radius_max,
        radius: config.radius(),
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
    }
}
