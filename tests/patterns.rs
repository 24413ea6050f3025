use std::fs;
use std::path::PathBuf;

use calibration_factory::composer::{self, PatternKind};
use calibration_factory::{compose, compose_views, compose_views_to_files, Surface};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("calib_factory_{}_{}", std::process::id(), name))
}

#[test]
fn views_match_single_canvas_slices() {
    for kind in [PatternKind::Rgb, PatternKind::Act, PatternKind::AlignBar] {
        let views = compose_views(kind, 100, 100, 4).expect("compose_views");
        assert_eq!(views.len(), 4);

        let mut canvas = Surface::new(400, 100, kind.background()).expect("canvas");
        composer::render_pattern(&mut canvas, kind, 1, 4).expect("render");

        for (i, view) in views.iter().enumerate() {
            assert_eq!(view.image().dimensions(), (100, 100));
            let slice = canvas.view(i as u32 * 100, 100);
            assert_eq!(
                view.image().as_raw(),
                slice.image().as_raw(),
                "{kind:?} view {i} differs from canvas slice"
            );
        }
    }
}

#[test]
fn compose_writes_a_loadable_image() {
    let path = temp_path("rgb.png");
    compose(PatternKind::Rgb, 320, 240, 2, 3, &path).expect("compose");
    let img = image::open(&path).expect("reopen");
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 240);
    fs::remove_file(&path).ok();
}

#[test]
fn degenerate_input_leaves_no_file() {
    let path = temp_path("degenerate.png");
    assert!(compose(PatternKind::Rgb, 0, 240, 2, 3, &path).is_err());
    assert!(compose(PatternKind::Act, 320, 240, 0, 3, &path).is_err());
    assert!(compose(PatternKind::AlignBar, 320, 240, 2, 0, &path).is_err());
    assert!(!path.exists(), "failed compose must not leave output behind");
}

#[test]
fn views_are_persisted_with_running_indices() {
    let base = temp_path("multi.png");
    let paths =
        compose_views_to_files(PatternKind::AlignBar, 120, 100, 3, &base).expect("views to files");
    assert_eq!(paths.len(), 3);
    for (i, path) in paths.iter().enumerate() {
        let name = path.file_name().and_then(|n| n.to_str()).expect("name");
        assert!(
            name.starts_with(&format!("calib_factory_{}_multi{i}", std::process::id())),
            "unexpected view file name {name}"
        );
        assert!(name.ends_with(".png"));
        let img = image::open(path).expect("reopen view");
        assert_eq!((img.width(), img.height()), (120, 100));
        fs::remove_file(path).ok();
    }
}

#[test]
fn rgb_boundary_scenario_has_three_bands() {
    let path = temp_path("boundary.png");
    compose(PatternKind::Rgb, 800, 600, 2, 3, &path).expect("compose");
    let img = image::open(&path).expect("reopen").to_rgba8();
    assert_eq!(img.get_pixel(100, 2).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(400, 2).0, [0, 255, 0, 255]);
    assert_eq!(img.get_pixel(700, 2).0, [0, 0, 255, 255]);
    fs::remove_file(&path).ok();
}
