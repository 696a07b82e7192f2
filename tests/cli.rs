use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fingerpaint_cmd() -> Command {
    Command::cargo_bin("fingerpaint").expect("binary exists")
}

const TRACE: &str = r##"[
  {"event": "select_color", "color": "#FF0000"},
  {"event": "touch_start", "x": 10.0, "y": 10.0},
  {"event": "touch_move", "x": 60.0, "y": 40.0},
  {"event": "touch_end"},
  {"event": "select_shape", "kind": "circle"},
  {"event": "touch_start", "x": 100.0, "y": 100.0},
  {"event": "touch_move", "x": 140.0, "y": 100.0},
  {"event": "touch_end"}
]"##;

#[test]
fn fingerpaint_help_prints_usage() {
    fingerpaint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Touch drawing canvas engine for mobile paint apps",
        ));
}

#[test]
fn no_flags_prints_usage_text() {
    fingerpaint_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--trace"));
}

#[test]
fn trace_replay_renders_svg_to_stdout() {
    let temp = TempDir::new().unwrap();
    let trace_path = temp.path().join("trace.json");
    std::fs::write(&trace_path, TRACE).unwrap();

    fingerpaint_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--trace", trace_path.to_str().unwrap(), "--render", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains("stroke=\"#FF0000\""))
        .stdout(predicate::str::contains("<circle"));
}

#[test]
fn trace_replay_renders_svg_to_a_file() {
    let temp = TempDir::new().unwrap();
    let trace_path = temp.path().join("trace.json");
    let out_path = temp.path().join("out.svg");
    std::fs::write(&trace_path, TRACE).unwrap();

    fingerpaint_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args([
            "--trace",
            trace_path.to_str().unwrap(),
            "--render",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn missing_trace_file_fails_with_context() {
    fingerpaint_cmd()
        .args(["--trace", "/nonexistent/trace.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read trace file"));
}

#[test]
fn malformed_trace_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let trace_path = temp.path().join("bad.json");
    std::fs::write(&trace_path, "{not json").unwrap();

    fingerpaint_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--trace", trace_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse trace file"));
}

#[test]
fn session_info_reports_missing_session() {
    let temp = TempDir::new().unwrap();

    fingerpaint_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("XDG_DATA_HOME", temp.path())
        .env("HOME", temp.path())
        .arg("--session-info")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn persist_and_restore_round_trip_through_the_session() {
    let temp = TempDir::new().unwrap();
    let trace_path = temp.path().join("trace.json");
    std::fs::write(&trace_path, TRACE).unwrap();

    let config_dir = temp.path().join("fingerpaint");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[session]\nenabled = true\nstorage = \"config\"\n",
    )
    .unwrap();

    fingerpaint_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--trace", trace_path.to_str().unwrap(), "--persist"])
        .assert()
        .success();

    fingerpaint_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--restore", "--render", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stroke=\"#FF0000\""));

    fingerpaint_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--clear-session")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
}
