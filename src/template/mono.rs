//! Single-ink templates.

use super::{Ink, svg_open};
use crate::geometry::{GeometryConfig, Point};

fn clip_path(id: &str, center: Point, r: f32) -> String {
    format!(
        r#"<clipPath id="{id}"><circle cx="{}" cy="{}" r="{r}"/></clipPath>"#,
        center.x, center.y
    )
}

fn outer_ring(geometry: &GeometryConfig, ink: Ink) -> String {
    let m = &geometry.mono;
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
        m.outer.x,
        m.outer.y,
        m.ring_radius(),
        ink.token(),
        m.outer_stroke_width
    )
}

/// Outline mark: three stroked circles and an outer ring.
pub fn outline_markup(geometry: &GeometryConfig, ink: Ink) -> String {
    let c = &geometry.color;
    let m = &geometry.mono;

    let mut svg = svg_open(geometry);
    svg.push_str("<defs>");
    svg.push_str(&clip_path("outerCircleMono", m.outer, m.outer_radius));
    svg.push_str("</defs>");
    svg.push_str(r#"<g clip-path="url(#outerCircleMono)">"#);
    for center in [c.green, c.red, c.blue] {
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            center.x,
            center.y,
            c.circle_radius,
            ink.token(),
            m.stroke_width
        ));
    }
    svg.push_str(&outer_ring(geometry, ink));
    svg.push_str("</g></svg>");
    svg
}

/// Filled silhouette: solid ink discs inside the outer ring, with the
/// region shared by all three discs knocked out to transparent.
///
/// The knockout is a luminance mask: opaque everywhere except the blue disc
/// clipped to both the green and the red disc.
pub fn filled_markup(geometry: &GeometryConfig, ink: Ink) -> String {
    let c = &geometry.color;
    let m = &geometry.mono;
    let r = c.circle_radius;
    let side = geometry.view_box;

    let mut svg = svg_open(geometry);
    svg.push_str("<defs>");
    svg.push_str(&clip_path("outerCircleFilled", m.outer, m.outer_radius));
    svg.push_str(&clip_path("greenClipFilled", c.green, r));
    svg.push_str(&clip_path("redClipFilled", c.red, r));
    svg.push_str(&format!(
        r#"<mask id="centreKnockout" maskUnits="userSpaceOnUse" x="0" y="0" width="{side}" height="{side}">"#
    ));
    svg.push_str(&format!(
        r##"<rect x="0" y="0" width="{side}" height="{side}" fill="#ffffff"/>"##
    ));
    svg.push_str(r#"<g clip-path="url(#greenClipFilled)"><g clip-path="url(#redClipFilled)">"#);
    svg.push_str(&format!(
        r##"<circle cx="{}" cy="{}" r="{r}" fill="#000000"/>"##,
        c.blue.x, c.blue.y
    ));
    svg.push_str("</g></g></mask>");
    svg.push_str("</defs>");

    svg.push_str(r#"<g clip-path="url(#outerCircleFilled)">"#);
    svg.push_str(r#"<g mask="url(#centreKnockout)">"#);
    for center in [c.green, c.red, c.blue] {
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{r}" fill="{}"/>"#,
            center.x,
            center.y,
            ink.token()
        ));
    }
    svg.push_str("</g>");
    svg.push_str(&outer_ring(geometry, ink));
    svg.push_str("</g></svg>");
    svg
}
