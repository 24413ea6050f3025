use image::Rgba;

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
pub const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);
pub const GRAY: Rgba<u8> = Rgba([160, 160, 164, 255]);
pub const CYAN: Rgba<u8> = Rgba([0, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Column band colors of the RGB identification grid, in band order.
pub const RGB_BANDS: [Rgba<u8>; 7] = [RED, GREEN, BLUE, YELLOW, MAGENTA, GRAY, CYAN];

/// Alternating stripe colors of the ACT registration pattern.
pub const ACT_STRIPES: [Rgba<u8>; 2] = [RED, BLUE];

/// Flat fill of an ACT alignment pin, before the gradient overlay.
pub const PIN_FILL: Rgba<u8> = GREEN;

/// Neutral 1 px stroke used for alignment-bar grid lines.
pub const GRID_STROKE: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Repeats `palette` in order until exactly `count` colors are produced,
/// truncating the final repetition. Stable: the same inputs always yield the
/// same sequence.
pub fn cycle(palette: &[Rgba<u8>], count: usize) -> Vec<Rgba<u8>> {
    debug_assert!(!palette.is_empty() || count == 0);
    palette.iter().copied().cycle().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_exact_length() {
        for n in [0usize, 1, 6, 7, 8, 20] {
            assert_eq!(cycle(&RGB_BANDS, n).len(), n);
        }
    }

    #[test]
    fn cycle_short_is_palette_prefix() {
        let out = cycle(&RGB_BANDS, 3);
        assert_eq!(out, vec![RED, GREEN, BLUE]);
    }

    #[test]
    fn cycle_repeats_at_palette_offset() {
        let out = cycle(&RGB_BANDS, 10);
        for i in 0..3 {
            assert_eq!(out[i], out[i + RGB_BANDS.len()]);
        }
    }

    #[test]
    fn cycle_two_color_alternates() {
        let out = cycle(&ACT_STRIPES, 5);
        assert_eq!(out, vec![RED, BLUE, RED, BLUE, RED]);
    }
}
