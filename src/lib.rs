//! Deterministic raster calibration patterns for projector/camera/display
//! alignment verification.
//!
//! Three pattern families are produced:
//!
//! - **RGB identification grid**: colored column bands overlaid with per-cell
//!   numeric index matrices.
//! - **ACT registration pattern**: 2-color horizontal stripes with drifting
//!   gradient-faded alignment pins.
//! - **Alignment-Bar pattern**: tiled 2-row grids with a wrap-around half-cell
//!   highlight band and running index labels, for seam calibration across
//!   multiple output tiles.
//!
//! Rendering is pure and single-pass: identical inputs always produce
//! identical pixels. See [`composer::compose`] for the file-producing entry
//! point and [`composer::compose_views`] for multi-view tiling.

pub mod act_pattern;
pub mod align_bar;
pub mod composer;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod rgb_grid;
pub mod surface;

pub use composer::{compose, compose_views, compose_views_to_files, PatternKind};
pub use error::PatternError;
pub use surface::Surface;
