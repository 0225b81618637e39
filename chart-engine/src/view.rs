//! FILENAME: chart-engine/src/view.rs
//! Chart Views - Renderable output for the frontend.
//!
//! A view is a fully reshaped, serializable render plan: the shapes to
//! draw plus the data-derived scale domains the renderer maps them with.
//! How the renderer turns domains into pixels, colors, or animation is
//! outside this crate.

use serde::{Deserialize, Serialize};
use reshape_engine::StackedSeries;

// ============================================================================
// SHARED SCALE TYPES
// ============================================================================

/// Domain of a continuous axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    /// Domain anchored at zero, up to `max`.
    pub fn from_zero(max: f64) -> Self {
        AxisDomain { min: 0.0, max }
    }
}

// ============================================================================
// SCATTER VIEW
// ============================================================================

/// One dot of the scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub country: String,
    pub year: f64,
    pub count: f64,
}

/// Render plan for the scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterView {
    /// Type-coerced pass-through of the source rows, in source order.
    pub points: Vec<ScatterPoint>,

    /// X domain: extent of the year values.
    pub x_domain: AxisDomain,

    /// Y domain: zero up to the largest count.
    pub y_domain: AxisDomain,

    pub plot_width: f64,
    pub plot_height: f64,
    pub title: String,
    pub subtitle: String,
}

// ============================================================================
// HEATMAP VIEW
// ============================================================================

/// One (country, year) cell of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub country: String,
    pub year: String,
    pub male_count: f64,
    pub female_count: f64,
}

impl HeatmapCell {
    /// Combined count driving the cell's fill.
    pub fn total(&self) -> f64 {
        self.male_count + self.female_count
    }
}

/// Render plan for the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapView {
    /// Dense cells covering the full country x year cross-product,
    /// countries outer, years inner.
    pub cells: Vec<HeatmapCell>,

    /// Band domain for the x axis: years in first-appearance order.
    pub x_domain: Vec<String>,

    /// Band domain for the y axis: countries in first-appearance order.
    pub y_domain: Vec<String>,

    /// Upper bound of the color domain: the largest single-source count
    /// over all cells. Which palette maps onto it is the renderer's call.
    pub color_max: f64,

    pub plot_width: f64,
    pub plot_height: f64,
    pub title: String,
    pub subtitle: String,
}

// ============================================================================
// RADIAL VIEW
// ============================================================================

/// Render plan for the radial stacked bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialView {
    /// One series per country in domain order; each band spans the
    /// cumulative [lower, upper] for one year. Outer order is category,
    /// inner order is year, matching layered rendering.
    pub series: Vec<StackedSeries>,

    /// Angular band domain: years in first-appearance order.
    pub angle_domain: Vec<String>,

    /// Upper bound of the radial domain: the largest year total.
    pub radius_max: f64,

    /// Outer radius of the chart.
    pub radius: f64,

    pub title: String,
    pub subtitle: String,
}
