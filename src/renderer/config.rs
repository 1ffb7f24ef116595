//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Canvas background color
    pub background: String,

    /// Fill color of every shape
    pub fill: String,

    /// Fill opacity in `[0, 1]`; shapes are drawn semi-transparent
    pub fill_opacity: f64,

    /// Outline color of every shape
    pub stroke: String,

    /// Outline width
    pub stroke_width: f64,

    /// Draw horizontal and vertical lines through the cloud center
    pub show_axes: bool,

    /// Color of the center lines
    pub axis_color: String,

    /// Whether to include XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "tc-" for "tc-shape")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 2000,
            background: "azure".to_string(),
            fill: "#00ff00".to_string(),
            fill_opacity: 0.16,
            stroke: "darkgreen".to_string(),
            stroke_width: 1.0,
            show_axes: true,
            axis_color: "black".to_string(),
            standalone: true,
            pretty_print: true,
            class_prefix: Some("tc-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Set shape fill color and opacity
    pub fn with_fill(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.fill = color.into();
        self.fill_opacity = opacity;
        self
    }

    /// Set shape outline color and width
    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = color.into();
        self.stroke_width = width;
        self
    }

    /// Show or hide the center lines
    pub fn with_axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!((config.width, config.height), (2000, 2000));
        assert_eq!(config.fill_opacity, 0.16);
        assert!(config.show_axes);
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("tc-".to_string()));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_canvas(640, 480)
            .with_background("white")
            .with_fill("#ff0000", 0.5)
            .with_stroke("black", 2.0)
            .with_axes(false)
            .with_standalone(false)
            .with_class_prefix("my-");

        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.fill, "#ff0000");
        assert_eq!(config.fill_opacity, 0.5);
        assert_eq!(config.stroke_width, 2.0);
        assert!(!config.show_axes);
        assert!(!config.standalone);
        assert_eq!(config.background, "white");
        assert_eq!(config.class_prefix, Some("my-".to_string()));

        let config = config.without_class_prefix();
        assert_eq!(config.class_prefix, None);
    }
}
