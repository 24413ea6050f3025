//! ACT registration pattern: alternating horizontal stripes anchor the coarse
//! row scale, and narrow gradient-faded "pins" give optical centroid targets.
//! Pin rows drift sideways by a bounded per-group offset so pins never line
//! up strictly vertically, which would confuse column detection.

use crate::error::PatternError;
use crate::geometry::{wrap_then_clamp, Rect};
use crate::palette::{self, ACT_STRIPES, BLACK, PIN_FILL, TRANSPARENT};
use crate::surface::Surface;

const PIN_WIDTH: f64 = 12.0;

/// Pin height relative to one stripe.
const PIN_HEIGHT_RATIO: f64 = 0.9;

/// Bounds of the per-stripe-group horizontal drift step.
const DRIFT_MIN: f64 = PIN_WIDTH * 1.5;
const DRIFT_MAX: f64 = 75.0;

/// Renders the ACT pattern onto `surface` in place. Both the stripe and the
/// pin phase run, or neither: invalid input fails before any drawing.
pub fn render(surface: &mut Surface, rows: u32, columns: u32) -> Result<(), PatternError> {
    if surface.width() <= 0.0 || surface.height() <= 0.0 || rows == 0 || columns == 0 {
        return Err(PatternError::InvalidDimension);
    }
    draw_stripes(surface, rows);
    draw_pins(surface, rows, columns);
    Ok(())
}

fn draw_stripes(surface: &mut Surface, rows: u32) {
    let width = surface.width();
    let height = surface.height();
    let count = rows as usize * ACT_STRIPES.len();
    let stripe_h = height / count as f64;
    for (i, color) in palette::cycle(&ACT_STRIPES, count).into_iter().enumerate() {
        surface.fill_rect(Rect::new(0.0, i as f64 * stripe_h, width, stripe_h), color);
    }
}

fn draw_pins(surface: &mut Surface, rows: u32, columns: u32) {
    let width = surface.width();
    let height = surface.height();
    let group_h = height / f64::from(rows);
    let stripe_h = group_h / ACT_STRIPES.len() as f64;
    let pin_h = stripe_h * PIN_HEIGHT_RATIO;
    let cell_w = width / f64::from(columns);
    let h_offset = (cell_w / 4.0).min(DRIFT_MAX).max(DRIFT_MIN);

    for g in 0..rows {
        let y_center = f64::from(g) * group_h + group_h / 2.0;
        for c in 0..columns {
            let base = f64::from(c) * cell_w + cell_w / 2.0 + f64::from(g) * h_offset;
            let x_center = wrap_then_clamp(base, PIN_WIDTH, width);
            let pin = Rect::new(
                x_center - PIN_WIDTH / 2.0,
                y_center - pin_h / 2.0,
                PIN_WIDTH,
                pin_h,
            );
            // Flat fill first, then the diagonal fade the centroid detector
            // integrates over.
            surface.fill_rect(pin, PIN_FILL);
            surface.gradient_rect(pin, TRANSPARENT, BLACK);
        }
    }
}
