//! RGB identification grid: vertical color bands cycled over a 7-color
//! palette, with every grid cell carrying a 3×3 matrix of its row-major
//! index. The repeated index lets a camera identify which cell it is looking
//! at even when only part of the cell is in frame.

use crate::error::PatternError;
use crate::geometry::{anchor_offsets, band_spans, clamp_low_wins, matrix_text_px, Rect};
use crate::palette::{self, BLACK, RGB_BANDS};
use crate::surface::{FontHandle, HAlign, Surface, VAlign};

/// Inset between a cell's edge and its index matrix, in pixels.
const CELL_MARGIN: f64 = 20.0;

/// The index is repeated in a fixed 3×3 arrangement inside each cell.
const INNER_MATRIX: usize = 3;

const MATRIX_MIN_PX: f64 = 10.0;

/// Renders the RGB grid onto `surface` in place.
pub fn render(surface: &mut Surface, rows: u32, columns: u32) -> Result<(), PatternError> {
    if surface.width() <= 0.0 || surface.height() <= 0.0 || rows == 0 || columns == 0 {
        return Err(PatternError::InvalidDimension);
    }
    let font = FontHandle::load()?;

    let width = surface.width();
    let height = surface.height();

    let colors = palette::cycle(&RGB_BANDS, columns as usize);
    for ((x, w), color) in band_spans(width, columns as usize).into_iter().zip(colors) {
        surface.fill_rect(Rect::new(x, 0.0, w, height), color);
    }

    let cells = Rect::new(0.0, 0.0, width, height).subdivide(rows as usize, columns as usize);
    let mut value = 0u32;
    for row in cells {
        for cell in row {
            draw_matrix(
                surface,
                &font,
                cell.shrink(CELL_MARGIN),
                INNER_MATRIX,
                &value.to_string(),
            );
            value += 1;
        }
    }
    Ok(())
}

/// Draws `text` at every anchor of an `n × n` matrix spread across `bounds`.
/// Edge anchors align to the near/far edge of their clamped text box so the
/// glyphs hug the matrix outline; interior anchors center.
fn draw_matrix(surface: &mut Surface, font: &FontHandle, bounds: Rect, n: usize, text: &str) {
    let px = matrix_text_px(&bounds, n, MATRIX_MIN_PX);
    let (tw, th) = font.measure(text, px);
    let text_size = tw.max(th);

    let ys = anchor_offsets(bounds.h, n);
    let xs = anchor_offsets(bounds.w, n);
    for (i, dy) in ys.iter().enumerate() {
        for (j, dx) in xs.iter().enumerate() {
            let text_rect = Rect::new(
                clamp_low_wins(
                    bounds.x,
                    bounds.x + dx - text_size / 2.0,
                    bounds.right() - text_size,
                ),
                clamp_low_wins(
                    bounds.y,
                    bounds.y + dy - text_size / 2.0,
                    bounds.bottom() - text_size,
                ),
                text_size,
                text_size,
            );
            let halign = if j == 0 {
                HAlign::Left
            } else if j == n - 1 {
                HAlign::Right
            } else {
                HAlign::Center
            };
            let valign = if i == 0 {
                VAlign::Top
            } else if i == n - 1 {
                VAlign::Bottom
            } else {
                VAlign::Middle
            };
            surface.draw_text(font, text_rect, halign, valign, text, px, BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, GREEN, RED, TRANSPARENT};

    #[test]
    fn rejects_zero_rows_or_columns() {
        let mut s = Surface::new(100, 100, TRANSPARENT).expect("surface");
        assert!(render(&mut s, 0, 3).is_err());
        assert!(render(&mut s, 2, 0).is_err());
    }

    #[test]
    fn three_columns_are_red_green_blue() {
        let mut s = Surface::new(800, 600, TRANSPARENT).expect("surface");
        render(&mut s, 2, 3).expect("render");
        // Sample above the 20 px cell margin where no text can land.
        assert_eq!(*s.image().get_pixel(100, 2), RED);
        assert_eq!(*s.image().get_pixel(400, 2), GREEN);
        assert_eq!(*s.image().get_pixel(700, 2), BLUE);
    }

    #[test]
    fn bands_cover_full_width() {
        let mut s = Surface::new(799, 100, TRANSPARENT).expect("surface");
        render(&mut s, 1, 7).expect("render");
        for x in 0..799 {
            assert_ne!(*s.image().get_pixel(x, 1), TRANSPARENT, "gap at {x}");
        }
    }

    #[test]
    fn every_cell_carries_dark_index_text() {
        let mut s = Surface::new(800, 600, TRANSPARENT).expect("render");
        render(&mut s, 2, 3).expect("render");
        let cell_w = 800.0 / 3.0;
        let cell_h = 600.0 / 2.0;
        for r in 0..2u32 {
            for c in 0..3u32 {
                let x0 = (f64::from(c) * cell_w + CELL_MARGIN) as u32;
                let y0 = (f64::from(r) * cell_h + CELL_MARGIN) as u32;
                let x1 = (f64::from(c + 1) * cell_w - CELL_MARGIN) as u32;
                let y1 = (f64::from(r) * cell_h + cell_h - CELL_MARGIN) as u32;
                let mut found_dark = false;
                'probe: for y in y0..y1 {
                    for x in x0..x1 {
                        let p = s.image().get_pixel(x, y);
                        if p[0] < 80 && p[1] < 80 && p[2] < 80 && p[3] > 128 {
                            found_dark = true;
                            break 'probe;
                        }
                    }
                }
                assert!(found_dark, "cell ({r},{c}) has no index text");
            }
        }
    }
}
