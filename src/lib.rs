//! Tag Cloud - circular layout engine for tag-cloud renderers
//!
//! This library places axis-aligned shapes around a center point so that the
//! cluster approximates a circle and no two shapes overlap, and renders the
//! result to SVG.
//!
//! # Example
//!
//! ```rust
//! use tag_cloud::{CircularCloudLayouter, CloudShape, Point, Size};
//!
//! let mut layouter = CircularCloudLayouter::new(Point::new(100, 100));
//! let first = layouter.put_next_shape(Size::new(10, 20)).unwrap();
//! assert_eq!(first.center(), Point::new(100, 100));
//!
//! let second = layouter.put_next_shape(Size::new(10, 20)).unwrap();
//! assert_ne!(second.center(), Point::new(100, 100));
//! ```

pub mod error;
pub mod layout;
pub mod preset;
pub mod renderer;

pub use error::CloudError;
pub use layout::{
    ArchimedeanSpiral, BoundingBox, CircularCloudLayouter, CloudShape, LayoutConfig, LayoutError,
    Point, RectangleFactory, RectangleShape, ShapeFactory, Size, SpiralPointGenerator,
};
pub use preset::{CloudPreset, PresetError, SizeDistribution, SizeRange};
pub use renderer::{render_svg, SvgConfig};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tag_cloud=debug` or `RUST_LOG=tag_cloud=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Lay out every shape of a preset
///
/// Sizes are drawn from the preset's seeded distribution and placed in
/// order, so the same preset always yields the same cloud.
pub fn generate_cloud(preset: &CloudPreset) -> Result<CircularCloudLayouter, CloudError> {
    let span = tracing::info_span!("generate_cloud", preset = %preset.name);
    let _enter = span.enter();

    let mut layouter = CircularCloudLayouter::with_config(preset.center(), &preset.layout);
    for size in preset.sample_sizes() {
        let placed = layouter.put_next_shape(size)?.bounding_box();
        tracing::trace!(
            width = size.width,
            height = size.height,
            left = placed.left,
            top = placed.top,
            "placed shape"
        );
    }

    if let Some(bounds) = layouter.bounds() {
        tracing::debug!(
            shapes = layouter.len(),
            width = bounds.width,
            height = bounds.height,
            ratio = bounds.aspect_ratio(),
            "cloud generated"
        );
    }
    Ok(layouter)
}

/// Lay out a preset and render it to SVG
///
/// `base` supplies renderer defaults; the preset overrides the canvas size
/// and any colors set in its `[style]` table.
///
/// # Example
///
/// ```rust
/// use tag_cloud::{render_preset, CloudPreset, SvgConfig};
///
/// let presets = CloudPreset::from_str(r#"
///     [[preset]]
///     name = "small"
///     width = 200
///     height = 200
///     count = 5
///     sizes = { kind = "fixed", width = 20, height = 10 }
/// "#).unwrap();
///
/// let svg = render_preset(&presets[0], &SvgConfig::default()).unwrap();
/// assert!(svg.contains("<svg"));
/// assert_eq!(svg.matches("tc-shape").count(), 5);
/// ```
pub fn render_preset(preset: &CloudPreset, base: &SvgConfig) -> Result<String, CloudError> {
    let layouter = generate_cloud(preset)?;
    let config = preset.svg_config(base.clone());
    Ok(render_svg(layouter.shapes(), layouter.center(), &config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_cloud_places_every_shape() {
        let preset = CloudPreset::builtin("mixed-random").unwrap();
        let layouter = generate_cloud(&preset).unwrap();
        assert_eq!(layouter.len(), preset.count);
        assert_eq!(layouter.center(), preset.center());
    }

    #[test]
    fn test_generate_cloud_is_deterministic() {
        let preset = CloudPreset::builtin("wide-and-tall").unwrap();
        let first = generate_cloud(&preset).unwrap();
        let second = generate_cloud(&preset).unwrap();
        let boxes = |l: &CircularCloudLayouter| {
            l.shapes()
                .iter()
                .map(|s| s.bounding_box())
                .collect::<Vec<_>>()
        };
        assert_eq!(boxes(&first), boxes(&second));
    }

    #[test]
    fn test_generate_cloud_reports_invalid_sizes() {
        let presets = CloudPreset::from_str(
            r#"
[[preset]]
name = "flat"
width = 100
height = 100
count = 2
sizes = { kind = "fixed", width = 10, height = 0 }
"#,
        )
        .unwrap();
        let err = generate_cloud(&presets[0]).unwrap_err();
        assert!(matches!(
            err,
            CloudError::Layout(LayoutError::InvalidSize {
                width: 10,
                height: 0
            })
        ));
    }

    #[test]
    fn test_render_preset_uses_preset_canvas() {
        let preset = CloudPreset::builtin("extreme-shapes").unwrap();
        let svg = render_preset(&preset, &SvgConfig::default().with_canvas(10, 10)).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 2000 2000""#));
        assert_eq!(svg.matches("tc-shape").count(), preset.count);
    }
}
