//! SVG rasterization and alpha compositing using resvg/tiny-skia.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use super::BackgroundFill;
use crate::error::RasterizationError;
use crate::icon::SizePx;

// ============================================================================
// SVG Rendering
// ============================================================================

/// Renders SVG markup into exactly `size` pixels.
///
/// The document is stretched independently on each axis to fill the target,
/// so a square document rendered into a square target keeps its proportions.
pub fn render_svg(svg_data: &str, size: SizePx) -> Result<RgbaImage, RasterizationError> {
    if size.is_empty() {
        return Err(RasterizationError::InvalidSize {
            width: size.width,
            height: size.height,
        });
    }

    let tree = Tree::from_str(svg_data, &Options::default())?;

    let svg_size = tree.size();
    let scale_x = size.width as f32 / svg_size.width();
    let scale_y = size.height as f32 / svg_size.height();

    let mut pixmap =
        Pixmap::new(size.width, size.height).ok_or(RasterizationError::Allocation {
            width: size.width,
            height: size.height,
        })?;
    resvg::render(&tree, Transform::from_scale(scale_x, scale_y), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Markup for a filled, optionally rounded, background rectangle.
pub fn background_markup(size: SizePx, corner_radius: u32, fill: BackgroundFill) -> String {
    let SizePx { width, height } = size;
    format!(
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg"><rect x="0" y="0" width="{width}" height="{height}" rx="{corner_radius}" ry="{corner_radius}" fill="{}"/></svg>"#,
        fill.to_hex()
    )
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();

    // tiny_skia stores premultiplied alpha
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let color = pixels[(y * width + x) as usize].demultiply();
        Rgba([color.red(), color.green(), color.blue(), color.alpha()])
    })
}

// ============================================================================
// Compositing
// ============================================================================

/// Composites a source image onto a destination image at the specified position.
///
/// Uses standard alpha blending (source over destination). Source pixels
/// falling outside the destination are dropped.
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx;
            let dy = y + sy;
            if dx >= dest.width() || dy >= dest.height() {
                continue;
            }

            let blended = alpha_blend(*src.get_pixel(sx, sy), *dest.get_pixel(dx, dy));
            dest.put_pixel(dx, dy, blended);
        }
    }
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><circle cx="50" cy="50" r="40" fill="#ff0000"/></svg>"##;

    #[test]
    fn render_fills_exact_target() {
        let img = render_svg(SIMPLE_SVG, SizePx::new(50, 30)).unwrap();
        assert_eq!(img.dimensions(), (50, 30));

        let center = img.get_pixel(25, 15);
        assert_eq!(center.0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0)[3], 0, "corner is outside the circle");
    }

    #[test]
    fn render_rejects_malformed_markup() {
        let result = render_svg("<svg><circle", SizePx::square(16));
        assert!(matches!(result, Err(RasterizationError::InvalidMarkup(_))));
    }

    #[test]
    fn render_rejects_zero_size() {
        let result = render_svg(SIMPLE_SVG, SizePx::new(0, 16));
        assert!(matches!(
            result,
            Err(RasterizationError::InvalidSize { width: 0, height: 16 })
        ));
    }

    #[test]
    fn rounded_background_clears_corners() {
        let size = SizePx::square(64);
        let markup = background_markup(size, 16, BackgroundFill::BLACK);
        let img = render_svg(&markup, size).unwrap();

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(32, 32).0, [0, 0, 0, 255]);
    }

    #[test]
    fn square_background_is_opaque_everywhere() {
        let size = SizePx::new(40, 20);
        let markup = background_markup(size, 0, BackgroundFill::BLACK);
        let img = render_svg(&markup, size).unwrap();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn composite_simple() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));

        composite_over(&mut dest, &src, 3, 3);

        assert_eq!(dest.get_pixel(5, 5).0, [0, 0, 255, 255]);
        assert_eq!(dest.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn composite_with_transparency() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 128]));

        composite_over(&mut dest, &src, 0, 0);

        let pixel = dest.get_pixel(0, 0);
        assert!(pixel[0] > 0, "Should have some red");
        assert!(pixel[2] > 0, "Should have some blue");
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn composite_clips_to_destination() {
        let mut dest = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));

        composite_over(&mut dest, &src, 2, 2);

        assert_eq!(dest.get_pixel(3, 3).0, [255, 255, 255, 255]);
        assert_eq!(dest.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }
}
