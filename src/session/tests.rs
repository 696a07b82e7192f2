use super::*;
use crate::config::{SessionConfig, SessionStorageMode};
use crate::draw::color::{BLACK, RED, WHITE};
use crate::draw::{FitMode, Shape, ShapeId, ShapeKind, StrokeBuffer, StrokeTool};
use crate::input::{CanvasState, ToolState};
use crate::util::Point;
use std::path::PathBuf;

fn dummy_canvas() -> CanvasState {
    CanvasState::with_defaults(
        ToolState::with_defaults(BLACK, 5.0, vec![5.0, 10.0, 15.0]),
        WHITE,
        0.1,
    )
}

fn canvas_with_content() -> CanvasState {
    let mut canvas = dummy_canvas();
    canvas.select_color(RED);

    canvas
        .scene
        .push_stroke(StrokeBuffer::begin(Point::new(0.0, 0.0)).commit(
            RED,
            3.0,
            StrokeTool::Pencil,
        ));
    canvas.scene.push_shape(Shape::begin(
        ShapeId(1),
        ShapeKind::Circle,
        Point::new(10.0, 10.0),
        RED,
        2.0,
    ));
    canvas.set_background("gallery://9", 1.0, FitMode::Cover);
    canvas
}

fn enabled_options(base_dir: PathBuf) -> SessionOptions {
    let mut options = SessionOptions::new(base_dir);
    options.persist_scene = true;
    options.compression = CompressionMode::Off;
    options
}

#[test]
fn snapshot_skips_when_empty_and_no_tool_state() {
    let mut options = SessionOptions::new(PathBuf::from("/tmp"));
    options.persist_scene = true;
    options.restore_tool_state = false;

    let canvas = dummy_canvas();
    assert!(snapshot_from_canvas(&canvas, &options).is_none());
}

#[test]
fn snapshot_includes_scene_and_tool_state() {
    let mut options = SessionOptions::new(PathBuf::from("/tmp"));
    options.persist_scene = true;

    let canvas = canvas_with_content();
    let snapshot = snapshot_from_canvas(&canvas, &options).expect("snapshot present");

    assert_eq!(snapshot.scene.strokes.len(), 1);
    assert_eq!(snapshot.scene.shapes.len(), 1);
    assert!(snapshot.scene.background.is_some());
    assert!(snapshot.tool_state.is_some());
}

#[test]
fn save_and_load_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let options = enabled_options(temp.path().to_path_buf());

    let canvas = canvas_with_content();
    let snapshot = snapshot_from_canvas(&canvas, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();

    let loaded = load_snapshot(&options).unwrap().expect("session present");
    assert_eq!(loaded.scene.strokes.len(), 1);
    assert_eq!(loaded.scene.shapes.len(), 1);
    assert_eq!(loaded.scene.background.as_ref().unwrap().uri, "gallery://9");

    let mut restored = dummy_canvas();
    apply_snapshot(&mut restored, loaded, &options);
    assert_eq!(restored.scene.strokes.len(), 1);
    assert_eq!(restored.tools.active_color, RED);
}

#[test]
fn compressed_sessions_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let mut options = enabled_options(temp.path().to_path_buf());
    options.compression = CompressionMode::On;

    let canvas = canvas_with_content();
    let snapshot = snapshot_from_canvas(&canvas, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();

    // Gzip magic bytes on disk, transparent on load.
    let raw = std::fs::read(options.session_file_path()).unwrap();
    assert_eq!(&raw[..2], &[0x1f, 0x8b]);

    let loaded = load_snapshot(&options).unwrap().expect("session present");
    assert_eq!(loaded.scene.shapes.len(), 1);
}

#[test]
fn save_rotates_a_backup() {
    let temp = tempfile::tempdir().unwrap();
    let options = enabled_options(temp.path().to_path_buf());

    let canvas = canvas_with_content();
    let snapshot = snapshot_from_canvas(&canvas, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();

    assert!(options.session_file_path().exists());
    assert!(options.backup_file_path().exists());
}

#[test]
fn entity_limit_truncates_restored_scenes() {
    let temp = tempfile::tempdir().unwrap();
    let mut options = enabled_options(temp.path().to_path_buf());

    let mut canvas = dummy_canvas();
    for i in 0..6 {
        canvas
            .scene
            .push_stroke(StrokeBuffer::begin(Point::new(i as f64, 0.0)).commit(
                BLACK,
                3.0,
                StrokeTool::Pencil,
            ));
    }
    let snapshot = snapshot_from_canvas(&canvas, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();

    options.max_scene_entities = 4;
    let loaded = load_snapshot(&options).unwrap().expect("session present");
    assert_eq!(loaded.scene.strokes.len(), 4);
}

#[test]
fn options_from_config_custom_storage() {
    let temp = tempfile::tempdir().unwrap();
    let custom_dir = temp.path().join("sessions");

    let mut cfg = SessionConfig::default();
    cfg.enabled = true;
    cfg.storage = SessionStorageMode::Custom;
    cfg.custom_directory = Some(custom_dir.to_string_lossy().to_string());

    let options = options_from_config(&cfg, temp.path()).unwrap();
    assert_eq!(options.base_dir, custom_dir);
    assert!(options.persist_scene);
    assert_eq!(
        options
            .session_file_path()
            .file_name()
            .unwrap()
            .to_string_lossy(),
        "session.json"
    );
}

#[test]
fn options_from_config_config_storage_uses_config_dir() {
    let temp = tempfile::tempdir().unwrap();

    let mut cfg = SessionConfig::default();
    cfg.enabled = true;
    cfg.storage = SessionStorageMode::Config;

    let options = options_from_config(&cfg, temp.path()).unwrap();
    assert_eq!(options.base_dir, temp.path());
}

#[test]
fn clear_session_removes_all_files() {
    let temp = tempfile::tempdir().unwrap();
    let options = enabled_options(temp.path().to_path_buf());

    let canvas = canvas_with_content();
    let snapshot = snapshot_from_canvas(&canvas, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();

    let outcome = clear_session(&options).unwrap();
    assert!(outcome.removed_session);
    assert!(outcome.removed_backup);
    assert!(outcome.removed_lock);
    assert!(!options.session_file_path().exists());
}

#[test]
fn inspect_reports_entity_counts() {
    let temp = tempfile::tempdir().unwrap();
    let options = enabled_options(temp.path().to_path_buf());

    let inspection = inspect_session(&options).unwrap();
    assert!(!inspection.exists);
    assert!(inspection.entity_counts.is_none());

    let canvas = canvas_with_content();
    let snapshot = snapshot_from_canvas(&canvas, &options).unwrap();
    save_snapshot(&snapshot, &options).unwrap();

    let inspection = inspect_session(&options).unwrap();
    assert!(inspection.exists);
    let counts = inspection.entity_counts.unwrap();
    assert_eq!(counts.strokes, 1);
    assert_eq!(counts.shapes, 1);
    assert!(counts.has_background);
    assert!(inspection.tool_state_present);
    assert!(!inspection.compressed);
}
