//! Pixel-space types for rendered icons.

use image::RgbaImage;

/// Where the logo landed inside a composited canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(size: SizePx) -> Self {
        Self::new(0, 0, size.width, size.height)
    }
}

/// Output dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Zero-area sizes cannot be rasterized.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// Where the background and the logo go on one output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub canvas: SizePx,
    pub logo: RectPx,
}

impl Layout {
    /// Centers a square logo of side `logo_side` on `canvas`, rounding the
    /// offsets down.
    pub fn centered(canvas: SizePx, logo_side: u32) -> Self {
        let x = (canvas.width - logo_side) / 2;
        let y = (canvas.height - logo_side) / 2;
        Self {
            canvas,
            logo: RectPx::new(x, y, logo_side, logo_side),
        }
    }

    /// The logo fills the whole canvas.
    pub fn full(canvas: SizePx) -> Self {
        Self {
            canvas,
            logo: RectPx::from_size(canvas),
        }
    }
}

/// A composited raster and the region the logo occupies in it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    pub data: RgbaImage,
    pub logo_bounds: RectPx,
}

impl RenderedIcon {
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }
}
