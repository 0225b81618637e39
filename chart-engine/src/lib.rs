//! FILENAME: chart-engine/src/lib.rs
//! Chart construction subsystem.
//!
//! This crate turns resident record collections into serializable render
//! plans for an external rendering sink. Each chart is a pure construction
//! function taking explicit configuration; there are no shared globals
//! between charts, and construction never fails. Only the load stage (in
//! `loader`) can error, and when it does the compute stage never runs.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the chart IS)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Pure construction from records (HOW we build)
//! - `pipeline`: Load-then-build composition over CSV sources

pub mod definition;
pub mod view;
pub mod engine;
pub mod pipeline;

pub use definition::*;
pub use view::*;
pub use engine::{build_heatmap, build_radial, build_scatter};
pub use pipeline::{heatmap_chart, radial_chart, scatter_chart};
