//! Rasterizes logo markup into output images.
//!
//! A [`Compositing`] option decides the canvas and where the logo lands on
//! it:
//!
//! ```text
//! None               RoundedBackground            Letterbox (W x H)
//! ┌────────┐         ╭────────╮                   ┌──────────────────┐
//! │  logo  │         │ ┌────┐ │ 65% of size       │      ┌────┐      │ 40% of
//! │        │         │ └────┘ │ centered          │      └────┘      │ min(W, H)
//! └────────┘         ╰────────╯                   └──────────────────┘
//! ```
//!
//! Offsets are rounded down; a one-pixel asymmetry on odd remainders is
//! expected.

pub mod svg;

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{ImageFormat, RgbaImage};
use palette::Srgb;
use serde::{Deserialize, Serialize};

pub use svg::{background_markup, composite_over, render_svg};

use crate::error::{FilesystemError, RasterizationError};
use crate::icon::{Layout, RenderedIcon, SizePx};

/// Share of the canvas side taken by the logo on a rounded background.
pub const BACKGROUND_LOGO_RATIO: f64 = 0.65;

/// Share of the shorter canvas side taken by a letterboxed logo.
pub const LETTERBOX_LOGO_RATIO: f64 = 0.4;

/// Corner radius of a rounded background when none is given, as a share of
/// its side.
pub const DEFAULT_CORNER_RATIO: f64 = 0.22;

/// `floor(value * ratio)` for pixel measurements.
pub fn scaled(value: u32, ratio: f64) -> u32 {
    (value as f64 * ratio).floor() as u32
}

// ============================================================================
// BackgroundFill
// ============================================================================

/// Opaque background color behind a composited logo.
///
/// Serialized as a lowercase `#rrggbb` string; any form accepted by
/// [`BackgroundFill::parse`] deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BackgroundFill {
    red: u8,
    green: u8,
    blue: u8,
}

impl BackgroundFill {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a hex color (`#000000`, `#000`, `000000`) or a CSS color name.
    pub fn parse(value: &str) -> Result<Self, RasterizationError> {
        let value = value.trim();
        let color = match palette::named::from_str(&value.to_ascii_lowercase()) {
            Some(named) => named,
            None => Srgb::<u8>::from_str(value)
                .map_err(|_| RasterizationError::InvalidColor(value.to_string()))?,
        };
        Ok(Self::from(color))
    }

    /// Lowercase `#rrggbb` form used in generated markup.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl From<Srgb<u8>> for BackgroundFill {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl TryFrom<String> for BackgroundFill {
    type Error = RasterizationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BackgroundFill> for String {
    fn from(fill: BackgroundFill) -> Self {
        fill.to_hex()
    }
}

impl Default for BackgroundFill {
    fn default() -> Self {
        Self::BLACK
    }
}

// ============================================================================
// Compositing
// ============================================================================

/// How a logo is placed on its output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compositing {
    /// The logo fills a `size x size` canvas.
    #[default]
    None,

    /// A `size x size` rounded square behind a 65% logo.
    RoundedBackground {
        fill: BackgroundFill,
        /// Defaults to 22% of the side.
        corner_radius: Option<u32>,
    },

    /// A `width x height` canvas with a 40% logo in the middle. The nominal
    /// size is ignored.
    Letterbox {
        width: u32,
        height: u32,
        fill: BackgroundFill,
        /// Defaults to square corners.
        corner_radius: Option<u32>,
    },
}

impl Compositing {
    /// Rounded background with the default corner radius.
    pub fn rounded(fill: BackgroundFill) -> Self {
        Self::RoundedBackground {
            fill,
            corner_radius: None,
        }
    }

    /// Rounded background with an explicit corner radius.
    pub fn rounded_with_radius(fill: BackgroundFill, corner_radius: u32) -> Self {
        Self::RoundedBackground {
            fill,
            corner_radius: Some(corner_radius),
        }
    }

    /// Square-cornered letterbox.
    pub fn letterbox(width: u32, height: u32, fill: BackgroundFill) -> Self {
        Self::Letterbox {
            width,
            height,
            fill,
            corner_radius: None,
        }
    }

    /// Dimensions of the produced image for a nominal `size`.
    pub fn output_size(&self, size: u32) -> SizePx {
        match *self {
            Self::Letterbox { width, height, .. } => SizePx::new(width, height),
            Self::None | Self::RoundedBackground { .. } => SizePx::square(size),
        }
    }

    /// Background fill and corner radius, or `None` when the logo is drawn
    /// without a background.
    pub fn background(&self, size: u32) -> Option<(BackgroundFill, u32)> {
        match *self {
            Self::None => None,
            Self::RoundedBackground {
                fill,
                corner_radius,
            } => Some((
                fill,
                corner_radius.unwrap_or_else(|| scaled(size, DEFAULT_CORNER_RATIO)),
            )),
            Self::Letterbox {
                fill,
                corner_radius,
                ..
            } => Some((fill, corner_radius.unwrap_or(0))),
        }
    }

    /// Computes the canvas and logo placement for a nominal `size`.
    pub fn layout(&self, size: u32) -> Result<Layout, RasterizationError> {
        let canvas = self.output_size(size);
        if canvas.is_empty() {
            return Err(RasterizationError::InvalidSize {
                width: canvas.width,
                height: canvas.height,
            });
        }

        Ok(match self {
            Self::None => Layout::full(canvas),
            Self::RoundedBackground { .. } => {
                Layout::centered(canvas, scaled(canvas.width, BACKGROUND_LOGO_RATIO))
            }
            Self::Letterbox { .. } => {
                Layout::centered(canvas, scaled(canvas.min_side(), LETTERBOX_LOGO_RATIO))
            }
        })
    }
}

/// Renders `markup` at `size` with the given compositing.
///
/// Fails if the markup does not parse or the output has a zero dimension.
/// A logo that scales down to nothing leaves just the background.
pub fn composite(
    markup: &str,
    size: u32,
    options: &Compositing,
) -> Result<RenderedIcon, RasterizationError> {
    let layout = options.layout(size)?;

    let Some((fill, corner_radius)) = options.background(size) else {
        return Ok(RenderedIcon {
            data: render_svg(markup, layout.canvas)?,
            logo_bounds: layout.logo,
        });
    };

    let mut canvas = render_svg(
        &background_markup(layout.canvas, corner_radius, fill),
        layout.canvas,
    )?;
    let logo_size = SizePx::new(layout.logo.width, layout.logo.height);
    if !logo_size.is_empty() {
        let logo = render_svg(markup, logo_size)?;
        composite_over(&mut canvas, &logo, layout.logo.x, layout.logo.y);
    }

    Ok(RenderedIcon {
        data: canvas,
        logo_bounds: layout.logo,
    })
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RasterizationError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Writes `bytes` to `path`, creating missing parent directories. An
/// existing file is replaced.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FilesystemError::new(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| FilesystemError::new(path, e))
}

// ============================================================================
// RasterArtifact
// ============================================================================

/// An encoded raster bound to its destination.
#[derive(Debug, Clone)]
pub struct RasterArtifact {
    pub path: PathBuf,
    pub size: SizePx,
    pub bytes: Vec<u8>,
}

impl RasterArtifact {
    /// Encodes a rendered icon for `path`.
    pub fn encode(path: impl Into<PathBuf>, icon: &RenderedIcon) -> Result<Self, RasterizationError> {
        Ok(Self {
            path: path.into(),
            size: icon.dimensions(),
            bytes: encode_png(&icon.data)?,
        })
    }

    pub fn write(&self) -> Result<(), FilesystemError> {
        write_artifact(&self.path, &self.bytes)
    }
}

// ============================================================================
// Tests
// ============================================================================
