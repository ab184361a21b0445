//! CLI Smoke Tests
//!
//! Integration tests for the svgfont CLI commands:
//! - `info`: Display font metrics
//! - `parse`: Parse every glyph of a webfont
//! - `path`: Parse a single path string
//!
//! Tests cover both success cases and failure cases (bad glyphs, bad paths).

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the svgfont binary
fn svgfont_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_svgfont"))
}

/// Get the path to a sample webfont
fn test_font(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // crates
    path.pop(); // root
    path.push("test-data");
    path.push(name);
    path
}

/// Create a temporary file path
fn temp_output(ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("svgfont_test_{}.{}", id, ext));
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(svgfont_binary())
        .args(args)
        .env_remove("SVGFONT_ON_ERROR")
        .env_remove("SVGFONT_PARALLEL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute svgfont")
}

fn font_arg(name: &str) -> String {
    test_font(name).display().to_string()
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_help() {
    let output = run(&["info", "--help"]);
    assert!(output.status.success(), "info --help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Display font metrics"));
}

#[test]
fn test_info_silkscreen() {
    let output = run(&["info", &font_arg("silkscreen.svg")]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Font: silkscreen"));
    assert!(stdout.contains("Units per em:   1000"));
    assert!(stdout.contains("Glyphs:           5"));
    assert!(stdout.contains("Using d-orig:   1"));
}

#[test]
fn test_info_missing_file() {
    let output = run(&["info", "/nonexistent/font.svg"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"));
}

// ============================================================================
// Parse Command Tests
// ============================================================================

#[test]
fn test_parse_json_to_file() {
    let out = temp_output("json");
    let output = run(&[
        "parse",
        &font_arg("silkscreen.svg"),
        "-o",
        &out.display().to_string(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["id"], "silkscreen");
    assert_eq!(json["units_per_em"], 1000);
    assert_eq!(json["glyphs"].as_array().unwrap().len(), 5);
    assert_eq!(json["glyphs"][1]["unicode"], "I");
    assert_eq!(json["glyphs"][1]["steps"][0]["command"], "M");
    assert_eq!(json["glyphs"][1]["steps"][0]["parameters"][0], 100.0);
    assert!(json.get("skipped").is_none());

    // Diagnostics go to the log, not the output
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using d-orig for glyph \"8\": \"M300 0C134 0 0 90 0 200S134 400 \"..."));
    assert!(stderr.contains("glyph=\"B\", closes=3, gerber-lp=\"dc\""));
    // collected as well as logged
    assert!(stderr.contains("5 glyphs, 42 steps, 1 overrides, 1 polarity mismatches"));

    let _ = std::fs::remove_file(out);
}

#[test]
fn test_parse_jsonl_to_stdout() {
    let output = run(&[
        "--quiet",
        "parse",
        &font_arg("silkscreen.svg"),
        "--format",
        "jsonl",
        "--no-parallel",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    let eight: serde_json::Value = serde_json::from_str(lines[4]).unwrap();
    assert_eq!(eight["unicode"], "8");
    assert_eq!(eight["gerber_lp"], "dc");
    assert_eq!(eight["steps"].as_array().unwrap().len(), 12);

    assert!(output.stderr.is_empty(), "--quiet hides warnings");
}

#[test]
fn test_parse_broken_font_aborts() {
    let output = run(&["parse", &font_arg("broken.svg")]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "nothing is written on abort");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("X10,10"));
}

#[test]
fn test_parse_broken_font_skips() {
    let output = run(&["parse", &font_arg("broken.svg"), "--on-error", "skip"]);
    assert!(!output.status.success(), "skipped glyphs still fail the run");

    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(json["glyphs"].as_array().unwrap().len(), 2);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 2);
    assert_eq!(json["skipped"][1]["unicode"], "Q");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 glyphs failed to parse"));
}

#[test]
fn test_parse_skip_from_environment() {
    let output = Command::new(svgfont_binary())
        .args(["parse", &font_arg("broken.svg")])
        .env("SVGFONT_ON_ERROR", "skip")
        .output()
        .expect("Failed to execute svgfont");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"skipped\""));
}

// ============================================================================
// Path Command Tests
// ============================================================================

#[test]
fn test_path_prints_steps() {
    let output = run(&["path", "M10,20 l-5 5z"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        r#"[{"command":"M","parameters":[10.0,20.0]},{"command":"l","parameters":[-5.0,5.0]},{"command":"z","parameters":[]}]"#
    );
}

#[test]
fn test_path_polarity_warning() {
    let output = run(&["path", "zz", "--polarity", "d", "--unicode", "o"]);
    assert!(output.status.success(), "polarity mismatch is only a warning");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("glyph=\"o\", closes=2, gerber-lp=\"d\""));
}

#[test]
fn test_path_unknown_command() {
    let output = run(&["path", "X10,10"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown path command"));
    assert!(stderr.contains("X10,10"));
}
