//! Raster surface and painter primitives. Wraps an [`image::RgbaImage`] with
//! the small drawing vocabulary the renderers need: filled rects, 1 px hollow
//! rects, a diagonal linear gradient, and measured, aligned text.
//!
//! A `Surface` is owned exclusively by one composition pass; nothing here is
//! shared or cached across calls.

use std::path::Path;

use ab_glyph::{FontRef, PxScale};
use image::{imageops, Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};

use crate::error::PatternError;
use crate::geometry::Rect;

const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Horizontal text anchoring inside a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text anchoring inside a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Font handle scoped to a single render call.
pub struct FontHandle {
    font: FontRef<'static>,
}

impl FontHandle {
    pub fn load() -> Result<Self, PatternError> {
        let font = FontRef::try_from_slice(FONT_BYTES)
            .map_err(|e| PatternError::SurfaceAcquisition(format!("font load failed: {e}")))?;
        Ok(Self { font })
    }

    /// Rendered extent of `text` at `px` pixels, in fractional pixels.
    pub fn measure(&self, text: &str, px: f64) -> (f64, f64) {
        let (w, h) = text_size(PxScale::from(px as f32), &self.font, text);
        (f64::from(w), f64::from(h))
    }
}

/// An ARGB raster canvas with fractional-coordinate drawing operations.
/// Fractional rectangles are resolved to pixels by rounding both edges, so
/// adjacent spans sharing an edge never gap or overlap.
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Result<Self, PatternError> {
        if width == 0 || height == 0 {
            return Err(PatternError::InvalidDimension);
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background),
        })
    }

    pub fn width(&self) -> f64 {
        f64::from(self.image.width())
    }

    pub fn height(&self) -> f64 {
        f64::from(self.image.height())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Full-height vertical slice starting at pixel column `x`.
    pub fn view(&self, x: u32, width: u32) -> Surface {
        Surface {
            image: imageops::crop_imm(&self.image, x, 0, width, self.image.height()).to_image(),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        if let Some(r) = pixel_rect(rect) {
            draw_filled_rect_mut(&mut self.image, r, color);
        }
    }

    /// 1 px border on the rounded rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        if let Some(r) = pixel_rect(rect) {
            draw_hollow_rect_mut(&mut self.image, r, color);
        }
    }

    /// Linear gradient from `from` to `to` along the rectangle's top-left to
    /// bottom-right diagonal, alpha-blended over the existing pixels.
    pub fn gradient_rect(&mut self, rect: Rect, from: Rgba<u8>, to: Rgba<u8>) {
        let Some(r) = pixel_rect(rect) else {
            return;
        };
        let diag_sq = rect.w * rect.w + rect.h * rect.h;
        if diag_sq <= 0.0 {
            return;
        }
        let x1 = (r.left() + r.width() as i32).min(self.image.width() as i32);
        let y1 = (r.top() + r.height() as i32).min(self.image.height() as i32);
        for py in r.top().max(0)..y1 {
            for px in r.left().max(0)..x1 {
                let dx = f64::from(px) + 0.5 - rect.x;
                let dy = f64::from(py) + 0.5 - rect.y;
                let t = ((dx * rect.w + dy * rect.h) / diag_sq).clamp(0.0, 1.0);
                let src = lerp_color(from, to, t);
                self.image.get_pixel_mut(px as u32, py as u32).blend(&src);
            }
        }
    }

    /// Draws `text` at `px` pixels anchored inside `rect`. The rectangle is
    /// expected to be pre-clamped by the caller; alignment only positions the
    /// measured text box within it.
    pub fn draw_text(
        &mut self,
        font: &FontHandle,
        rect: Rect,
        halign: HAlign,
        valign: VAlign,
        text: &str,
        px: f64,
        color: Rgba<u8>,
    ) {
        let (tw, th) = font.measure(text, px);
        let x = match halign {
            HAlign::Left => rect.x,
            HAlign::Center => rect.x + (rect.w - tw) / 2.0,
            HAlign::Right => rect.right() - tw,
        };
        let y = match valign {
            VAlign::Top => rect.y,
            VAlign::Middle => rect.y + (rect.h - th) / 2.0,
            VAlign::Bottom => rect.bottom() - th,
        };
        draw_text_mut(
            &mut self.image,
            color,
            x.round() as i32,
            y.round() as i32,
            PxScale::from(px as f32),
            &font.font,
            text,
        );
    }

    pub fn save(&self, path: &Path) -> Result<(), PatternError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PatternError::Persistence {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        self.image.save(path).map_err(|e| PatternError::Persistence {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Rounds a fractional rect to the pixel grid. Returns `None` when the
/// rounded extent is empty.
fn pixel_rect(rect: Rect) -> Option<imageproc::rect::Rect> {
    let x0 = rect.x.round();
    let y0 = rect.y.round();
    let w = rect.right().round() - x0;
    let h = rect.bottom().round() - y0;
    if w < 1.0 || h < 1.0 {
        return None;
    }
    Some(imageproc::rect::Rect::at(x0 as i32, y0 as i32).of_size(w as u32, h as u32))
}

fn lerp_color(from: Rgba<u8>, to: Rgba<u8>, t: f64) -> Rgba<u8> {
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    Rgba([
        mix(from[0], to[0]),
        mix(from[1], to[1]),
        mix(from[2], to[2]),
        mix(from[3], to[3]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, RED, TRANSPARENT, WHITE};

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(Surface::new(0, 10, TRANSPARENT).is_err());
        assert!(Surface::new(10, 0, TRANSPARENT).is_err());
    }

    #[test]
    fn fill_rect_overwrites_pixels() {
        let mut s = Surface::new(10, 10, WHITE).expect("surface");
        s.fill_rect(Rect::new(2.0, 2.0, 4.0, 4.0), RED);
        assert_eq!(*s.image().get_pixel(3, 3), RED);
        assert_eq!(*s.image().get_pixel(0, 0), WHITE);
    }

    #[test]
    fn adjacent_fractional_rects_do_not_gap() {
        let mut s = Surface::new(9, 3, WHITE).expect("surface");
        // 9 / 2 = 4.5: both halves round the shared edge identically.
        s.fill_rect(Rect::new(0.0, 0.0, 4.5, 3.0), RED);
        s.fill_rect(Rect::new(4.5, 0.0, 4.5, 3.0), BLACK);
        for x in 0..9 {
            assert_ne!(*s.image().get_pixel(x, 1), WHITE, "gap at column {x}");
        }
    }

    #[test]
    fn gradient_fades_along_diagonal() {
        let mut s = Surface::new(20, 20, WHITE).expect("surface");
        let clear_black = Rgba([0, 0, 0, 0]);
        s.gradient_rect(Rect::new(0.0, 0.0, 20.0, 20.0), clear_black, BLACK);
        let near = s.image().get_pixel(1, 1)[0];
        let far = s.image().get_pixel(18, 18)[0];
        assert!(near > 200, "top-left should stay close to white, got {near}");
        assert!(far < 55, "bottom-right should be close to black, got {far}");
    }

    #[test]
    fn view_is_a_full_height_slice() {
        let mut s = Surface::new(10, 4, WHITE).expect("surface");
        s.fill_rect(Rect::new(5.0, 0.0, 5.0, 4.0), RED);
        let v = s.view(5, 5);
        assert_eq!(v.image().dimensions(), (5, 4));
        assert_eq!(*v.image().get_pixel(0, 0), RED);
    }
}
