//! Pure layout math shared by the pattern renderers: rectangle subdivision,
//! band spans, matrix anchor placement and the wrap-then-clamp helper used
//! for pin and half-cell positioning. Everything here is float-based;
//! fractional pixel boundaries are resolved once, at rasterization time.

/// Axis-aligned rectangle with fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Insets all four edges by `margin`. The result may have negative extent
    /// for tiny rectangles; rasterization treats those as empty.
    pub fn shrink(&self, margin: f64) -> Rect {
        Rect::new(
            self.x + margin,
            self.y + margin,
            self.w - margin * 2.0,
            self.h - margin * 2.0,
        )
    }

    /// Splits the rectangle into `rows * columns` equal cells, row-major.
    pub fn subdivide(&self, rows: usize, columns: usize) -> Vec<Vec<Rect>> {
        let cell_w = self.w / columns as f64;
        let cell_h = self.h / rows as f64;
        (0..rows)
            .map(|r| {
                (0..columns)
                    .map(|c| {
                        Rect::new(
                            self.x + c as f64 * cell_w,
                            self.y + r as f64 * cell_h,
                            cell_w,
                            cell_h,
                        )
                    })
                    .collect()
            })
            .collect()
    }
}

/// Vertical band x-spans `(x, width)` partitioning `[0, width]`.
///
/// Every band is `width / count` wide except the last, which absorbs the
/// accumulated rounding remainder so the spans tile the full extent exactly.
pub fn band_spans(width: f64, count: usize) -> Vec<(f64, f64)> {
    let mut spans = Vec::with_capacity(count);
    let mut x = 0.0;
    for i in 0..count {
        let w = if i == count - 1 {
            width - x
        } else {
            width / count as f64
        };
        spans.push((x, w));
        x += w;
    }
    spans
}

/// Anchor offsets for `count` evenly spread positions across `extent`,
/// first anchor at 0 and last at `extent`. A single anchor is centered
/// rather than divided by `count - 1`.
pub fn anchor_offsets(extent: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![extent / 2.0];
    }
    (0..count)
        .map(|i| i as f64 * extent / (count - 1) as f64)
        .collect()
}

/// Wraps an item center coordinate back into the drawable extent, then clamps.
///
/// Positions below half an item width wrap by `+extent`; positions beyond the
/// extent wrap by `-extent`. The result always lies in
/// `[item_width / 2, extent - item_width]`.
pub fn wrap_then_clamp(x: f64, item_width: f64, extent: f64) -> f64 {
    let mut x = x;
    if x < item_width / 2.0 {
        x += extent;
    } else if x > extent {
        x -= extent;
    }
    x.min(extent - item_width).max(item_width / 2.0)
}

/// Clamps `value` into `[low, high]`, with `low` winning when the interval is
/// inverted (text box larger than its bound).
pub fn clamp_low_wins(low: f64, value: f64, high: f64) -> f64 {
    value.min(high).max(low)
}

/// Adaptive pixel size for an `n × n` index matrix inside `bounds`: the text
/// must fit between matrix anchors at any grid density.
pub fn matrix_text_px(bounds: &Rect, matrix: usize, min_px: f64) -> f64 {
    let raw = bounds.w.min(bounds.h) / (matrix as f64 * 2.0 - 1.0);
    raw.min(90.0).max(min_px)
}
