//! Full-color and favicon templates.

use super::svg_open;
use crate::geometry::{GeometryConfig, Point};

const GREEN: &str = "#00A652";
const RED: &str = "#ED1C24";
const BLUE: &str = "#2E3192";
const YELLOW: &str = "#FCF006";
const CYAN: &str = "#01ACF1";
const MAGENTA: &str = "#EA018E";
const CENTRE: &str = "#FFFFFF";
const FAVICON_DISK: &str = "#111111";

fn circle(out: &mut String, center: Point, r: f32, attrs: &str) {
    out.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{r}"{attrs}/>"#,
        center.x, center.y
    ));
}

fn clip_path(out: &mut String, id: &str, center: Point, r: f32) {
    out.push_str(&format!(r#"<clipPath id="{id}">"#));
    circle(out, center, r, "");
    out.push_str("</clipPath>");
}

fn filled(color: &str) -> String {
    format!(r#" fill="{color}""#)
}

/// Full-color mark: additive-style overlaps of green, red and blue circles
/// on a dark radial gradient, clipped to the outer disk.
pub fn color_markup(geometry: &GeometryConfig) -> String {
    let c = &geometry.color;
    let r = c.circle_radius;
    let side = geometry.view_box;

    let mut svg = svg_open(geometry);
    svg.push_str("<defs>");
    svg.push_str(
        r#"<radialGradient id="blackGradient" cx="50%" cy="50%" r="50%">"#,
    );
    svg.push_str(r#"<stop offset="0%" style="stop-color:#2a2a2a;stop-opacity:1"/>"#);
    svg.push_str(r#"<stop offset="50%" style="stop-color:#1a1a1a;stop-opacity:1"/>"#);
    svg.push_str(r#"<stop offset="100%" style="stop-color:#000000;stop-opacity:1"/>"#);
    svg.push_str("</radialGradient>");
    clip_path(&mut svg, "outerCircleColor", c.outer, c.outer_radius);
    clip_path(&mut svg, "greenClip", c.green, r);
    clip_path(&mut svg, "redClip", c.red, r);
    clip_path(&mut svg, "blueClip", c.blue, r);
    svg.push_str("</defs>");

    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{side}" height="{side}" fill="url(#blackGradient)"/>"#
    ));

    svg.push_str(r#"<g clip-path="url(#outerCircleColor)">"#);
    circle(&mut svg, c.green, r, &filled(GREEN));
    circle(&mut svg, c.red, r, &filled(RED));
    circle(&mut svg, c.blue, r, &filled(BLUE));

    svg.push_str(r#"<g clip-path="url(#greenClip)">"#);
    circle(&mut svg, c.red, r, &filled(YELLOW));
    svg.push_str("</g>");
    svg.push_str(r#"<g clip-path="url(#greenClip)">"#);
    circle(&mut svg, c.blue, r, &filled(CYAN));
    svg.push_str("</g>");
    svg.push_str(r#"<g clip-path="url(#redClip)">"#);
    circle(&mut svg, c.blue, r, &filled(MAGENTA));
    svg.push_str("</g>");

    svg.push_str(r#"<g clip-path="url(#greenClip)"><g clip-path="url(#redClip)">"#);
    circle(&mut svg, c.blue, r, &filled(CENTRE));
    svg.push_str("</g></g>");

    svg.push_str("</g></svg>");
    svg
}

/// Favicon mark: primaries and the white centre on a flat dark disk.
///
/// Drops the gradient and the pairwise overlap layers, which turn to noise
/// below 32px.
pub fn favicon_markup(geometry: &GeometryConfig) -> String {
    let c = &geometry.color;
    let r = c.circle_radius;

    let mut svg = svg_open(geometry);
    svg.push_str("<defs>");
    clip_path(&mut svg, "outerCircleFavicon", c.outer, c.outer_radius);
    clip_path(&mut svg, "greenClipFavicon", c.green, r);
    clip_path(&mut svg, "redClipFavicon", c.red, r);
    svg.push_str("</defs>");

    circle(&mut svg, c.outer, c.outer_radius, &filled(FAVICON_DISK));

    svg.push_str(r#"<g clip-path="url(#outerCircleFavicon)">"#);
    circle(&mut svg, c.green, r, &filled(GREEN));
    circle(&mut svg, c.red, r, &filled(RED));
    circle(&mut svg, c.blue, r, &filled(BLUE));
    svg.push_str(r#"<g clip-path="url(#greenClipFavicon)"><g clip-path="url(#redClipFavicon)">"#);
    circle(&mut svg, c.blue, r, &filled(CENTRE));
    svg.push_str("</g></g>");
    svg.push_str("</g></svg>");
    svg
}
