//! SVG renderer for placed clouds
//!
//! This module takes the ordered shapes of a layouter and produces an SVG
//! string with one filled, outlined rectangle per shape.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
