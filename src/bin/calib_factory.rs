use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use calibration_factory::{compose, compose_views_to_files, PatternError, PatternKind};

#[derive(Parser, Debug)]
#[command(
    name = "calib_factory",
    about = "Produces deterministic calibration images (RGB grid, ACT stripes, alignment bars)",
    version
)]
struct Cli {
    /// File path to save the image, e.g. /path/pattern.png
    destination: PathBuf,

    /// Calibration image type. Format '<kind>CxR' with kind one of
    /// rgb | act | bar, C columns and R rows, e.g. rgb3x4
    #[arg(short = 't', long = "type", default_value = "rgb3x4")]
    pattern: String,

    /// Calibration image width > 0
    #[arg(short = 'w', long, default_value_t = 3840)]
    width: u32,

    /// Calibration image height > 0
    #[arg(short = 'H', long, default_value_t = 2880)]
    height: u32,

    /// Produce N numbered per-view images instead of one canvas; the pattern
    /// is laid out across N equal-width tiles of a single row
    #[arg(long)]
    views: Option<u32>,

    /// Per-view tile width in views mode (defaults to --width)
    #[arg(long)]
    tile_width: Option<u32>,

    /// Per-view tile height in views mode (defaults to --height)
    #[arg(long)]
    tile_height: Option<u32>,
}

/// Parses a pattern string like `rgb3x4` into its kind and `columns x rows`.
/// The kind prefix is case-insensitive, matching the original tool.
fn parse_pattern(s: &str) -> Result<(PatternKind, u32, u32), PatternError> {
    const KINDS: [(&str, PatternKind); 3] = [
        ("rgb", PatternKind::Rgb),
        ("act", PatternKind::Act),
        ("bar", PatternKind::AlignBar),
    ];
    let lower = s.to_ascii_lowercase();
    for (prefix, kind) in KINDS {
        if let Some(rest) = lower.strip_prefix(prefix) {
            let (columns, rows) = parse_grid(rest)
                .ok_or_else(|| PatternError::UnknownPatternType(s.to_string()))?;
            return Ok((kind, columns, rows));
        }
    }
    Err(PatternError::UnknownPatternType(s.to_string()))
}

fn parse_grid(s: &str) -> Option<(u32, u32)> {
    let (c, r) = s.split_once('x')?;
    let columns: u32 = c.parse().ok()?;
    let rows: u32 = r.parse().ok()?;
    if columns == 0 || rows == 0 {
        return None;
    }
    Some((columns, rows))
}

fn run(cli: &Cli) -> Result<(), PatternError> {
    if cli.width == 0 || cli.height == 0 {
        return Err(PatternError::InvalidDimension);
    }
    let (kind, columns, rows) = parse_pattern(&cli.pattern)?;

    match cli.views {
        Some(views) => {
            let tile_w = cli.tile_width.unwrap_or(cli.width);
            let tile_h = cli.tile_height.unwrap_or(cli.height);
            let paths =
                compose_views_to_files(kind, tile_w, tile_h, views, &cli.destination)?;
            for path in paths {
                println!("Success. Please find image at {}", path.display());
            }
        }
        None => {
            compose(kind, cli.width, cli.height, rows, columns, &cli.destination)?;
            println!("Success. Please find image at {}", cli.destination.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
