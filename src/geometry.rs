//! Parametric geometry of the logo family.
//!
//! A [`GeometryConfig`] holds every coordinate the markup templates need.
//! It is built once (usually from [`Default`] or a config file) and then only
//! borrowed.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "viewBox": 1024.0,
//!   "color": { "outerRadius": 270.0, "outer": { "x": 512.0, "y": 511.0 }, "...": "..." },
//!   "mono": { "outerRadius": 283.0, "strokeWidth": 33.0, "...": "..." }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A point in view-box units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Geometry of the full-color mark: three overlapping circles clipped by an
/// outer disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGeometry {
    pub outer_radius: f32,
    pub outer: Point,
    /// Radius shared by the three primary circles.
    pub circle_radius: f32,
    pub green: Point,
    pub red: Point,
    pub blue: Point,
}

impl Default for ColorGeometry {
    fn default() -> Self {
        Self {
            outer_radius: 270.0,
            outer: Point::new(512.0, 511.0),
            circle_radius: 234.0,
            green: Point::new(513.0, 369.0),
            red: Point::new(365.0, 595.0),
            blue: Point::new(643.0, 595.0),
        }
    }
}

/// Geometry of the single-ink marks. Circle centres are shared with
/// [`ColorGeometry`]; only the outer ring and stroke widths differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonoGeometry {
    pub outer_radius: f32,
    pub outer: Point,
    pub stroke_width: f32,
    pub outer_stroke_width: f32,
}

impl MonoGeometry {
    /// Radius of the outer ring's stroke centreline, so the ring's outer edge
    /// sits exactly on the clip circle.
    pub fn ring_radius(&self) -> f32 {
        self.outer_radius - self.outer_stroke_width / 2.0
    }
}

impl Default for MonoGeometry {
    fn default() -> Self {
        Self {
            outer_radius: 283.0,
            outer: Point::new(508.0, 510.0),
            stroke_width: 33.0,
            outer_stroke_width: 36.0,
        }
    }
}

/// Complete geometry for one logo family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryConfig {
    /// Side of the square view box (and of the nominal document size).
    #[serde(default = "default_view_box")]
    pub view_box: f32,
    #[serde(default)]
    pub color: ColorGeometry,
    #[serde(default)]
    pub mono: MonoGeometry,
}

fn default_view_box() -> f32 {
    1024.0
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            view_box: default_view_box(),
            color: ColorGeometry::default(),
            mono: MonoGeometry::default(),
        }
    }
}

impl GeometryConfig {
    /// Serializes the geometry to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes geometry from a JSON string. Missing sections fall back
    /// to the shipped defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
