//! SVG generation from placed cloud shapes

use crate::layout::{BoundingBox, CloudShape, Point};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    background: Option<String>,
    axes: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            background: None,
            axes: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Fill the whole canvas with the background color
    pub fn add_background(&mut self) {
        let prefix = self.prefix();
        self.background = Some(format!(
            r#"{}<rect class="{}background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            self.config.width,
            self.config.height,
            escape_xml(&self.config.background)
        ));
    }

    /// Add a vertical and a horizontal line crossing at `center`
    pub fn add_axes(&mut self, center: Point) {
        let (width, height) = (self.config.width, self.config.height);
        self.add_axis_line(center.x, 0, center.x, height as i32);
        self.add_axis_line(0, center.y, width as i32, center.y);
    }

    fn add_axis_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let prefix = self.prefix();
        self.axes.push(format!(
            r#"{}<line class="{}axis" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            self.indent_str(),
            prefix,
            x1,
            y1,
            x2,
            y2,
            escape_xml(&self.config.axis_color)
        ));
    }

    /// Add one placed shape, drawn as its bounding rectangle with fill and outline
    pub fn add_shape(&mut self, id: &str, kind: &str, bounds: BoundingBox) {
        let prefix = self.prefix();
        let class_list = [format!("{}shape", prefix), format!("{}{}", prefix, kind)].join(" ");

        self.elements.push(format!(
            r#"{}<rect id="{}" class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            escape_xml(id),
            class_list,
            bounds.left,
            bounds.top,
            bounds.width,
            bounds.height,
            self.shape_styles()
        ));
    }

    fn shape_styles(&self) -> String {
        format!(
            r#" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}""#,
            escape_xml(&self.config.fill),
            self.config.fill_opacity,
            escape_xml(&self.config.stroke),
            self.config.stroke_width
        )
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let (width, height) = (self.config.width, self.config.height);

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        ));
        svg.push_str(nl);

        for line in self
            .background
            .iter()
            .chain(self.axes.iter())
            .chain(self.elements.iter())
        {
            svg.push_str(line);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render placed shapes to an SVG string
///
/// Shapes are drawn in the given order, so later shapes paint over earlier
/// ones. `center` positions the optional axis lines.
pub fn render_svg(shapes: &[Box<dyn CloudShape>], center: Point, config: &SvgConfig) -> String {
    tracing::debug!(
        shapes = shapes.len(),
        width = config.width,
        height = config.height,
        "rendering cloud"
    );

    let mut builder = SvgBuilder::new(config.clone());
    builder.add_background();
    if config.show_axes {
        builder.add_axes(center);
    }

    for (index, shape) in shapes.iter().enumerate() {
        let id = format!("shape-{}", index);
        builder.add_shape(&id, shape.kind(), shape.bounding_box());
    }

    builder.build()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
