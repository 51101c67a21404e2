//! Vector markup templates for every logo variant.
//!
//! Each variant is a pure function of a [`GeometryConfig`]. Single-ink
//! variants share one generator parameterized by an [`Ink`] token, so the
//! inverted mark is the outline mark with a different ink rather than a
//! text rewrite of it.

mod color;
mod mono;

pub use color::{color_markup, favicon_markup};
pub use mono::{filled_markup, outline_markup};

use serde::{Deserialize, Serialize};

use crate::geometry::GeometryConfig;

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The logo variants the templates can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoVariant {
    /// Full-color mark on a dark gradient square.
    Color,
    /// Outline mark in black ink, for light backgrounds.
    MonoOutline,
    /// Solid single-ink silhouette, used for menu-bar template images.
    MonoFilled,
    /// Outline mark in white ink, for dark backgrounds.
    Inverted,
    /// Simplified color mark that stays legible at 16px.
    Favicon,
}

impl LogoVariant {
    pub const ALL: [LogoVariant; 5] = [
        LogoVariant::Color,
        LogoVariant::MonoOutline,
        LogoVariant::MonoFilled,
        LogoVariant::Inverted,
        LogoVariant::Favicon,
    ];

    /// Short, stable name used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::MonoOutline => "mono",
            Self::MonoFilled => "filled",
            Self::Inverted => "white",
            Self::Favicon => "favicon",
        }
    }

    /// The ink a single-ink variant is drawn with, `None` for color variants.
    pub fn ink(self) -> Option<Ink> {
        match self {
            Self::MonoOutline | Self::MonoFilled => Some(Ink::BLACK),
            Self::Inverted => Some(Ink::WHITE),
            Self::Color | Self::Favicon => None,
        }
    }
}

/// Color token used for every stroke and fill of a single-ink mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ink(&'static str);

impl Ink {
    pub const BLACK: Ink = Ink("black");
    pub const WHITE: Ink = Ink("white");

    /// Creates an ink from any SVG paint value.
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn token(self) -> &'static str {
        self.0
    }
}

/// Produces the markup for `variant`.
pub fn produce(geometry: &GeometryConfig, variant: LogoVariant) -> String {
    match variant.ink() {
        Some(ink) => produce_with_ink(geometry, variant, ink),
        None => match variant {
            LogoVariant::Favicon => favicon_markup(geometry),
            _ => color_markup(geometry),
        },
    }
}

/// Produces the markup for `variant` drawn with an explicit ink.
///
/// Outline variants (`MonoOutline`, `Inverted`) share the outline shape and
/// differ only by ink. The ink is ignored for color variants.
pub fn produce_with_ink(geometry: &GeometryConfig, variant: LogoVariant, ink: Ink) -> String {
    match variant {
        LogoVariant::MonoOutline | LogoVariant::Inverted => outline_markup(geometry, ink),
        LogoVariant::MonoFilled => filled_markup(geometry, ink),
        LogoVariant::Favicon => favicon_markup(geometry),
        LogoVariant::Color => color_markup(geometry),
    }
}

/// Markup for every variant of one geometry, produced once and borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSet {
    color: String,
    mono: String,
    filled: String,
    inverted: String,
    favicon: String,
}

impl MarkupSet {
    pub fn new(geometry: &GeometryConfig) -> Self {
        Self {
            color: produce(geometry, LogoVariant::Color),
            mono: produce(geometry, LogoVariant::MonoOutline),
            filled: produce(geometry, LogoVariant::MonoFilled),
            inverted: produce(geometry, LogoVariant::Inverted),
            favicon: produce(geometry, LogoVariant::Favicon),
        }
    }

    pub fn get(&self, variant: LogoVariant) -> &str {
        match variant {
            LogoVariant::Color => &self.color,
            LogoVariant::MonoOutline => &self.mono,
            LogoVariant::MonoFilled => &self.filled,
            LogoVariant::Inverted => &self.inverted,
            LogoVariant::Favicon => &self.favicon,
        }
    }
}

/// Opening `<svg>` tag for a square document of the configured view box.
pub(crate) fn svg_open(geometry: &GeometryConfig) -> String {
    let side = geometry.view_box;
    format!(
        r#"<svg width="{side}" height="{side}" viewBox="0 0 {side} {side}" xmlns="{SVG_NS}">"#
    )
}
