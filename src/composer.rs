//! Pattern selection, surface allocation and output. `compose` produces one
//! file; `compose_views` renders a single wide canvas and slices it into N
//! numbered views whose cell indices stay continuous with the one-canvas
//! render.

use std::path::{Path, PathBuf};

use image::Rgba;

use crate::error::PatternError;
use crate::palette::{BLACK, TRANSPARENT};
use crate::surface::Surface;
use crate::{act_pattern, align_bar, rgb_grid};

/// The three supported calibration pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Rgb,
    Act,
    AlignBar,
}

impl PatternKind {
    /// Canvas fill before the renderer runs. The alignment-bar pattern also
    /// paints its own black background, so seam tools see no alpha edge.
    pub fn background(self) -> Rgba<u8> {
        match self {
            PatternKind::Rgb | PatternKind::Act => TRANSPARENT,
            PatternKind::AlignBar => BLACK,
        }
    }
}

/// Renders `kind` onto an existing surface.
pub fn render_pattern(
    surface: &mut Surface,
    kind: PatternKind,
    rows: u32,
    columns: u32,
) -> Result<(), PatternError> {
    match kind {
        PatternKind::Rgb => rgb_grid::render(surface, rows, columns),
        PatternKind::Act => act_pattern::render(surface, rows, columns),
        PatternKind::AlignBar => align_bar::render(surface, rows, columns),
    }
}

/// Allocates a `width x height` surface, renders `kind` and writes the image
/// to `path`. Any failure leaves no output behind.
pub fn compose(
    kind: PatternKind,
    width: u32,
    height: u32,
    rows: u32,
    columns: u32,
    path: &Path,
) -> Result<(), PatternError> {
    let mut surface = Surface::new(width, height, kind.background())?;
    render_pattern(&mut surface, kind, rows, columns)?;
    surface.save(path)
}

/// Renders `kind` across `view_count` equal-width tiles of one conceptual row
/// and returns the per-view slices, left to right.
///
/// The slices are cut from a single `tile_width * view_count` canvas, so
/// numbering and geometry match what a one-canvas render with
/// `columns = view_count` would show per `tile_width` pixel window.
pub fn compose_views(
    kind: PatternKind,
    tile_width: u32,
    tile_height: u32,
    view_count: u32,
) -> Result<Vec<Surface>, PatternError> {
    if tile_width == 0 || tile_height == 0 || view_count == 0 {
        return Err(PatternError::InvalidDimension);
    }
    let canvas_width = tile_width
        .checked_mul(view_count)
        .ok_or(PatternError::InvalidDimension)?;
    let mut canvas = Surface::new(canvas_width, tile_height, kind.background())?;
    render_pattern(&mut canvas, kind, 1, view_count)?;
    Ok((0..view_count)
        .map(|i| canvas.view(i * tile_width, tile_width))
        .collect())
}

/// `compose_views`, persisted as `name0.ext, name1.ext, ...` next to `base`.
pub fn compose_views_to_files(
    kind: PatternKind,
    tile_width: u32,
    tile_height: u32,
    view_count: u32,
    base: &Path,
) -> Result<Vec<PathBuf>, PatternError> {
    let views = compose_views(kind, tile_width, tile_height, view_count)?;
    let mut paths = Vec::with_capacity(views.len());
    for (i, view) in views.iter().enumerate() {
        let path = numbered_path(base, i);
        view.save(&path)?;
        paths.push(path);
    }
    Ok(paths)
}

fn numbered_path(base: &Path, index: usize) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pattern");
    let name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{index}.{ext}"),
        None => format!("{stem}{index}"),
    };
    base.with_file_name(name)
}
