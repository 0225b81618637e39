//! FILENAME: chart-engine/src/definition.rs
//! Chart Definitions - The serializable configuration.
//!
//! These types DESCRIBE a chart: dimensions, margins, titles, the CSV
//! sources it draws from, and the exact column names it consumes.
//! Construction functions take these explicitly; nothing here is shared
//! mutable state between charts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Outer chart dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
}

/// Margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Plot width remaining inside the margins.
    pub fn inner_width(&self, dimensions: &ChartDimensions) -> f64 {
        dimensions.width - self.left - self.right
    }

    /// Plot height remaining inside the margins.
    pub fn inner_height(&self, dimensions: &ChartDimensions) -> f64 {
        dimensions.height - self.top - self.bottom
    }
}

// ============================================================================
// SCATTER PLOT
// ============================================================================

/// Configuration for the scatter chart (graduates per year, one dot per row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterConfig {
    /// CSV source for the pass-through point sequence.
    pub source: PathBuf,

    pub dimensions: ChartDimensions,
    pub margins: Margins,

    pub title: String,
    pub subtitle: String,

    /// Column holding the categorical country label.
    pub country_field: String,

    /// Column holding the x-axis year, coerced to a number.
    pub year_field: String,

    /// Column holding the y-axis count, coerced to a number.
    pub value_field: String,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        ScatterConfig {
            source: PathBuf::from("Filtered_Medical_Graduates.csv"),
            dimensions: ChartDimensions { width: 800.0, height: 600.0 },
            margins: Margins { top: 60.0, right: 30.0, bottom: 40.0, left: 50.0 },
            title: "Medical Graduates Over the Years".to_string(),
            subtitle: "Trends of Medical Graduates by Year and Country".to_string(),
            country_field: "Country of Medical Graduates".to_string(),
            year_field: "Passing Years".to_string(),
            value_field: "Total Number of Medical Graduates".to_string(),
        }
    }
}

// ============================================================================
// HEATMAP
// ============================================================================

/// Configuration for the heatmap (country x year cells from two sources).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// CSV source contributing the first value of each cell (male counts).
    pub male_source: PathBuf,

    /// CSV source contributing the second value of each cell (female counts).
    pub female_source: PathBuf,

    pub dimensions: ChartDimensions,
    pub margins: Margins,

    pub title: String,
    pub subtitle: String,

    pub country_field: String,
    pub year_field: String,
    pub value_field: String,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        HeatmapConfig {
            male_source: PathBuf::from("male physician under 35.csv"),
            female_source: PathBuf::from("female physician under 35.csv"),
            dimensions: ChartDimensions { width: 800.0, height: 800.0 },
            margins: Margins { top: 100.0, right: 40.0, bottom: 100.0, left: 150.0 },
            title: "Physicians Co-occurrence Heatmap".to_string(),
            subtitle: "Counts of Male and Female Physicians under 35 by Country and Year"
                .to_string(),
            country_field: "Country".to_string(),
            year_field: "Year".to_string(),
            value_field: "Value".to_string(),
        }
    }
}

// ============================================================================
// RADIAL STACKED BAR
// ============================================================================

/// Configuration for the radial stacked bar chart (per-year country stacks
/// wrapped around a circle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialConfig {
    /// CSV source for the long-form (year, country, value) rows.
    pub source: PathBuf,

    pub dimensions: ChartDimensions,

    /// Uniform margin between the outer radius and the chart edge.
    pub margin: f64,

    pub title: String,
    pub subtitle: String,

    pub country_field: String,
    pub year_field: String,
    pub value_field: String,
}

impl RadialConfig {
    /// Outer radius of the chart.
    pub fn radius(&self) -> f64 {
        self.dimensions.width.min(self.dimensions.height) / 2.0 - self.margin
    }
}

impl Default for RadialConfig {
    fn default() -> Self {
        RadialConfig {
            source: PathBuf::from("female physician over 75.csv"),
            dimensions: ChartDimensions { width: 800.0, height: 800.0 },
            margin: 50.0,
            title: "Female Physicians Over 75".to_string(),
            subtitle: "Trends of Female Physicians Over 75 by Year and Country".to_string(),
            country_field: "Country".to_string(),
            year_field: "Year".to_string(),
            value_field: "Value".to_string(),
        }
    }
}
