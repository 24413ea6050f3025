//! Alignment-Bar pattern: every tile carries a small 2-row grid whose top row
//! shows a continuous highlighted "address" band and whose bottom row marks
//! and labels the tile's own index. When the tiles are physically arranged
//! side by side the top band reads as one marker that wraps at the pattern's
//! ends, so a seam offset of even half a cell is visible at a glance.

use crate::error::PatternError;
use crate::geometry::{clamp_low_wins, Rect};
use crate::palette::{BLACK, GRID_STROKE, WHITE};
use crate::surface::{FontHandle, HAlign, Surface, VAlign};

const GRID_ROWS: usize = 2;

/// Per-cell size caps; the sub-grid shrinks to fit small tiles.
const MAX_CELL_W: f64 = 12.0;
const MAX_CELL_H: f64 = 50.0;

const LABEL_MIN_PX: f64 = 5.0;
const LABEL_MAX_PX: f64 = 90.0;

/// Renders the alignment-bar pattern onto `surface` in place.
pub fn render(surface: &mut Surface, rows: u32, columns: u32) -> Result<(), PatternError> {
    if surface.width() <= 0.0 || surface.height() <= 0.0 || rows == 0 || columns == 0 {
        return Err(PatternError::InvalidDimension);
    }
    let font = FontHandle::load()?;

    let width = surface.width();
    let height = surface.height();
    surface.fill_rect(Rect::new(0.0, 0.0, width, height), BLACK);

    let tile_count = rows as usize * columns as usize;
    let grid_cols = tile_count;
    let tile_w = width / f64::from(columns);
    let tile_h = height / f64::from(rows);
    let grid_w = (MAX_CELL_W * grid_cols as f64).min(tile_w);
    let grid_h = (MAX_CELL_H * GRID_ROWS as f64).min(tile_h);
    let cell_w = grid_w / grid_cols as f64;
    let cell_h = grid_h / GRID_ROWS as f64;
    let label_px = cell_w.min(cell_h).min(LABEL_MAX_PX).max(LABEL_MIN_PX);

    for tr in 0..rows {
        for tc in 0..columns {
            let index = (tr * columns + tc) as usize;
            let grid = Rect::new(
                f64::from(tc) * tile_w + (tile_w - grid_w) / 2.0,
                f64::from(tr) * tile_h + (tile_h - grid_h) / 2.0,
                grid_w,
                grid_h,
            );
            draw_tile(surface, &font, grid, index, grid_cols, cell_w, cell_h, label_px);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_tile(
    surface: &mut Surface,
    font: &FontHandle,
    grid: Rect,
    index: usize,
    grid_cols: usize,
    cell_w: f64,
    cell_h: f64,
    label_px: f64,
) {
    // Top row: the address band, in cell units.
    for (start, len) in address_band_spans(index, grid_cols) {
        surface.fill_rect(
            Rect::new(grid.x + start * cell_w, grid.y, len * cell_w, cell_h),
            WHITE,
        );
    }

    // Bottom row: this tile's own cell, highlighted and labeled.
    let own = Rect::new(
        grid.x + index as f64 * cell_w,
        grid.y + cell_h,
        cell_w,
        cell_h,
    );
    surface.fill_rect(own, WHITE);

    let label = index.to_string();
    let (tw, th) = font.measure(&label, label_px);
    let text_rect = Rect::new(
        clamp_low_wins(grid.x, own.x + (cell_w - tw) / 2.0, grid.right() - tw),
        clamp_low_wins(grid.y, own.bottom() - th, grid.bottom() - th),
        tw,
        th,
    );
    surface.draw_text(
        font,
        text_rect,
        HAlign::Center,
        VAlign::Bottom,
        &label,
        label_px,
        BLACK,
    );

    // Grid lines over every cell, then the two boundary half-cells get their
    // own strokes so the seam stays visible when tiles are butted together.
    for r in 0..GRID_ROWS {
        for c in 0..grid_cols {
            surface.stroke_rect(
                Rect::new(
                    grid.x + c as f64 * cell_w,
                    grid.y + r as f64 * cell_h,
                    cell_w,
                    cell_h,
                ),
                GRID_STROKE,
            );
        }
    }
    surface.stroke_rect(Rect::new(grid.x, grid.y, cell_w / 2.0, cell_h), GRID_STROKE);
    surface.stroke_rect(
        Rect::new(grid.right() - cell_w / 2.0, grid.y, cell_w / 2.0, cell_h),
        GRID_STROKE,
    );
}

/// Highlighted spans of the top "address" row for one tile, as
/// `(start, length)` pairs in cell units.
///
/// The general case straddles the tile's own cell with a 2-cell band. The
/// first tile splits it 1.5 + 0.5 with the trailing half wrapped to the far
/// right edge; the last tile is the mirror image, so a physical strip laid
/// across all tiles reads as one continuous wrapped marker.
pub fn address_band_spans(index: usize, count: usize) -> Vec<(f64, f64)> {
    let n = count as f64;
    if count == 1 {
        vec![(0.0, 1.0)]
    } else if index == 0 {
        vec![(0.0, 1.5), (n - 0.5, 0.5)]
    } else if index == count - 1 {
        vec![(0.0, 0.5), (n - 1.5, 1.5)]
    } else {
        vec![(index as f64 - 0.5, 2.0)]
    }
}
