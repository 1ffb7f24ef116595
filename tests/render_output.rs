//! SVG output tests: exact output for a tiny cloud, and structural checks
//! for larger generated clouds.

use tag_cloud::{
    generate_cloud, render_preset, render_svg, CircularCloudLayouter, CloudPreset, Point, Size,
    SvgConfig,
};

#[test]
fn test_single_shape_svg() {
    let mut layouter = CircularCloudLayouter::new(Point::new(100, 100));
    layouter.put_next_shape(Size::new(10, 20)).unwrap();

    let config = SvgConfig::new().with_canvas(200, 200);
    let svg = render_svg(layouter.shapes(), layouter.center(), &config);

    insta::assert_snapshot!(svg, @r##"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200">
      <rect class="tc-background" x="0" y="0" width="200" height="200" fill="azure"/>
      <line class="tc-axis" x1="100" y1="0" x2="100" y2="200" stroke="black" stroke-width="1"/>
      <line class="tc-axis" x1="0" y1="100" x2="200" y2="100" stroke="black" stroke-width="1"/>
      <rect id="shape-0" class="tc-shape tc-rectangle" x="95" y="90" width="10" height="20" fill="#00ff00" fill-opacity="0.16" stroke="darkgreen" stroke-width="1"/>
    </svg>
    "##);
}

#[test]
fn test_rendered_rects_follow_placement_order() {
    let preset = CloudPreset::builtin("wide-and-tall").unwrap();
    let layouter = generate_cloud(&preset).unwrap();
    let svg = render_svg(
        layouter.shapes(),
        layouter.center(),
        &preset.svg_config(SvgConfig::default()),
    );

    let mut last_position = 0;
    for (index, shape) in layouter.shapes().iter().enumerate() {
        let bounds = shape.bounding_box();
        let element = format!(
            r#"id="shape-{}" class="tc-shape tc-rectangle" x="{}" y="{}" width="{}" height="{}""#,
            index, bounds.left, bounds.top, bounds.width, bounds.height
        );
        let position = svg
            .find(&element)
            .unwrap_or_else(|| panic!("shape {} missing from output", index));
        assert!(position > last_position);
        last_position = position;
    }
}

#[test]
fn test_preset_style_applies_to_output() {
    let presets = CloudPreset::from_str(
        r##"
[[preset]]
name = "styled"
width = 300
height = 300
count = 4
sizes = { kind = "fixed", width = 30, height = 12 }

[preset.style]
background = "white"
fill = "#ff8800"
fill_opacity = 0.5
show_axes = false
"##,
    )
    .unwrap();

    let svg = render_preset(&presets[0], &SvgConfig::default()).unwrap();
    assert!(svg.contains(r#"fill="white""#));
    assert!(svg.contains(r##"fill="#ff8800" fill-opacity="0.5""##));
    assert!(!svg.contains("<line"));
    assert_eq!(svg.matches("<rect id=").count(), 4);
}

#[test]
fn test_every_shape_fits_the_canvas() {
    for preset in CloudPreset::builtins() {
        let layouter = generate_cloud(&preset).unwrap();
        let bounds = layouter.bounds().unwrap();
        assert!(bounds.left >= 0 && bounds.top >= 0, "{}: {:?}", preset.name, bounds);
        assert!(
            bounds.right() <= preset.width as i32 && bounds.bottom() <= preset.height as i32,
            "{}: {:?}",
            preset.name,
            bounds
        );
    }
}
