//! Cloud presets loaded from TOML
//!
//! A preset describes one batch of shapes to lay out: canvas size, how many
//! shapes, how their sizes are drawn, and the random seed that makes the
//! batch reproducible. Optional `[layout]` and `[style]` tables tune the
//! spiral and the rendered colors.

use std::ops::Range;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

use crate::layout::{LayoutConfig, LayoutError, Point, Size};
use crate::renderer::SvgConfig;

/// Errors that can occur when loading or using presets
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to read preset file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse preset TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },
    #[error("Size range '{field}' is empty")]
    EmptyRange { field: &'static str },
    #[error("Invalid [layout] table: {0}")]
    InvalidLayout(#[from] LayoutError),
}

/// Half-open integer range `[min, max)` used to draw one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SizeRange {
    pub min: i32,
    pub max: i32,
}

impl SizeRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    fn as_range(&self) -> Range<i32> {
        self.min..self.max
    }

    fn validate(&self, field: &'static str) -> Result<(), PresetError> {
        if self.min >= self.max {
            return Err(PresetError::EmptyRange { field });
        }
        Ok(())
    }
}

/// How shape sizes are drawn for a preset
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SizeDistribution {
    /// Every shape has the same size
    Fixed { width: i32, height: i32 },
    /// Width and height drawn independently
    Uniform { width: SizeRange, height: SizeRange },
    /// Half wide (long x short), half tall (short x long)
    WideOrTall { long: SizeRange, short: SizeRange },
    /// A third each of wide, tall and square shapes
    Extreme {
        long: SizeRange,
        short: SizeRange,
        square: SizeRange,
    },
}

impl SizeDistribution {
    /// Reject ranges that cannot produce a value
    pub fn validate(&self) -> Result<(), PresetError> {
        match self {
            SizeDistribution::Fixed { .. } => Ok(()),
            SizeDistribution::Uniform { width, height } => {
                width.validate("width")?;
                height.validate("height")
            }
            SizeDistribution::WideOrTall { long, short } => {
                long.validate("long")?;
                short.validate("short")
            }
            SizeDistribution::Extreme {
                long,
                short,
                square,
            } => {
                long.validate("long")?;
                short.validate("short")?;
                square.validate("square")
            }
        }
    }

    /// Draw one size. Ranges must have been validated.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Size {
        match self {
            SizeDistribution::Fixed { width, height } => Size::new(*width, *height),
            SizeDistribution::Uniform { width, height } => Size::new(
                rng.gen_range(width.as_range()),
                rng.gen_range(height.as_range()),
            ),
            SizeDistribution::WideOrTall { long, short } => {
                if rng.gen_bool(0.5) {
                    Size::new(
                        rng.gen_range(long.as_range()),
                        rng.gen_range(short.as_range()),
                    )
                } else {
                    Size::new(
                        rng.gen_range(short.as_range()),
                        rng.gen_range(long.as_range()),
                    )
                }
            }
            SizeDistribution::Extreme {
                long,
                short,
                square,
            } => match rng.gen_range(0..3) {
                0 => Size::new(
                    rng.gen_range(long.as_range()),
                    rng.gen_range(short.as_range()),
                ),
                1 => Size::new(
                    rng.gen_range(short.as_range()),
                    rng.gen_range(long.as_range()),
                ),
                _ => Size::new(
                    rng.gen_range(square.as_range()),
                    rng.gen_range(square.as_range()),
                ),
            },
        }
    }
}

/// Color overrides for rendering a preset
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetStyle {
    pub background: Option<String>,
    pub fill: Option<String>,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub show_axes: Option<bool>,
}

impl PresetStyle {
    /// Apply the overrides on top of a base configuration
    pub fn apply(&self, mut config: SvgConfig) -> SvgConfig {
        if let Some(background) = &self.background {
            config = config.with_background(background.as_str());
        }
        if let Some(fill) = &self.fill {
            config.fill = fill.clone();
        }
        if let Some(opacity) = self.fill_opacity {
            config.fill_opacity = opacity;
        }
        if let Some(stroke) = &self.stroke {
            config.stroke = stroke.clone();
        }
        if let Some(width) = self.stroke_width {
            config.stroke_width = width;
        }
        if let Some(show) = self.show_axes {
            config.show_axes = show;
        }
        config
    }
}

/// One reproducible batch of shapes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CloudPreset {
    pub name: String,
    /// Canvas width; the cloud is centered horizontally
    pub width: u32,
    /// Canvas height; the cloud is centered vertically
    pub height: u32,
    /// Number of shapes to place
    pub count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub sizes: SizeDistribution,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub style: PresetStyle,
}

fn default_seed() -> u64 {
    1
}

/// TOML file holding any number of `[[preset]]` tables
#[derive(Deserialize)]
struct PresetFile {
    preset: Vec<CloudPreset>,
}

/// Presets shipped with the crate
const BUILTIN_PRESETS: &str = r#"
[[preset]]
name = "wide-and-tall"
width = 2000
height = 2000
count = 200
sizes = { kind = "wide_or_tall", long = { min = 60, max = 160 }, short = { min = 15, max = 40 } }

[[preset]]
name = "mixed-random"
width = 2000
height = 2000
count = 250
sizes = { kind = "uniform", width = { min = 20, max = 120 }, height = { min = 20, max = 80 } }

[[preset]]
name = "extreme-shapes"
width = 2000
height = 2000
count = 220

[preset.sizes]
kind = "extreme"
long = { min = 100, max = 200 }
short = { min = 10, max = 25 }
square = { min = 20, max = 60 }
"#;

impl CloudPreset {
    /// Load all presets from a TOML file
    pub fn from_file(path: &Path) -> Result<Vec<Self>, PresetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load all presets from a TOML string
    pub fn from_str(content: &str) -> Result<Vec<Self>, PresetError> {
        let parsed: PresetFile = toml::from_str(content)?;
        for preset in &parsed.preset {
            preset.sizes.validate()?;
            preset.layout.validate()?;
        }
        tracing::debug!(count = parsed.preset.len(), "loaded presets");
        Ok(parsed.preset)
    }

    /// All built-in presets
    pub fn builtins() -> Vec<Self> {
        Self::from_str(BUILTIN_PRESETS).expect("Built-in presets should be valid TOML")
    }

    /// Look up a built-in preset by name
    pub fn builtin(name: &str) -> Result<Self, PresetError> {
        Self::find(Self::builtins(), name)
    }

    /// Pick a preset by name from a loaded list
    pub fn find(presets: Vec<Self>, name: &str) -> Result<Self, PresetError> {
        let available = presets
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        presets
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PresetError::UnknownPreset {
                name: name.to_string(),
                available,
            })
    }

    /// Center of the canvas, used as the cloud center
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Draw all shape sizes for this preset, in placement order
    pub fn sample_sizes(&self) -> Vec<Size> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count).map(|_| self.sizes.sample(&mut rng)).collect()
    }

    /// Renderer configuration for this preset's canvas and style
    pub fn svg_config(&self, base: SvgConfig) -> SvgConfig {
        self.style.apply(base.with_canvas(self.width, self.height))
    }
}
