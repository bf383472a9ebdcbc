//! End-to-end tests for the `rdfsmooth` binary.
//!
//! ## Test Organization
//!
//! 1. **Success** - Default run on a 100-row curve
//! 2. **Failures** - Malformed input, invalid parameters

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

use rdfsmooth::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rdfsmooth"))
        .args(args)
        .output()
        .expect("binary should start")
}

fn write_sine(path: &Path, n: usize) {
    let text: String = (0..n)
        .map(|i| {
            let r = i as f64 * 0.05;
            format!("{r} {}\n", 1.0 + (r * 3.0).sin())
        })
        .collect();
    fs::write(path, text).unwrap();
}

// ============================================================================
// Success Tests
// ============================================================================

/// Test the default run: three 100-row outputs, masked moving-average ends, plot.
#[test]
fn test_default_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("rdf.dat");
    write_sine(&input, 100);

    let out = run_cli(&[input.to_str().unwrap()]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("rdf_smoothed_[ma|spline|gaussian].dat"));
    assert!(stdout.contains("rdf_smoothed.svg"));

    let paths = OutputPaths::for_input(&input);
    for path in paths.all() {
        let (x, y) = read_series(path).unwrap();
        assert_eq!(x.len(), 100);
        assert_eq!(y.len(), 100);
    }

    let (_, ma) = read_series(&paths.moving_average).unwrap();
    assert!(ma[..25].iter().all(Option::is_none));
    assert!(ma[25..76].iter().all(Option::is_some));
    assert!(ma[76..].iter().all(Option::is_none));

    let svg = fs::read_to_string(dir.path().join("rdf_smoothed.svg")).unwrap();
    assert!(svg.contains("<svg"));
}

/// Test that `--no-plot` skips the chart but still writes the data.
#[test]
fn test_no_plot() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("curve.dat");
    write_sine(&input, 40);

    let out = run_cli(&[input.to_str().unwrap(), "--no-plot", "--window", "5"]);
    assert!(out.status.success());

    assert!(!dir.path().join("curve_smoothed.svg").exists());
    assert!(dir.path().join("curve_smoothed_gaussian.dat").exists());
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test that a non-numeric token fails without writing outputs.
#[test]
fn test_malformed_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.dat");
    fs::write(&input, "0.0 1.0\n0.1 oops\n0.2 1.5\n").unwrap();

    let out = run_cli(&[input.to_str().unwrap()]);
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");

    let paths = OutputPaths::for_input(&input);
    for path in paths.all() {
        assert!(!path.exists());
    }
    assert!(!dir.path().join("bad_smoothed.svg").exists());
}

/// Test that a negative sigma is rejected before any output is produced.
#[test]
fn test_negative_sigma() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("rdf.dat");
    write_sine(&input, 20);

    let out = run_cli(&[input.to_str().unwrap(), "--gauss-sigma", "-1"]);
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("gauss-sigma"), "stderr: {stderr}");
    assert!(!dir.path().join("rdf_smoothed_ma.dat").exists());
}

/// Test that a sigma whose kernel cannot be allocated fails without output.
#[test]
fn test_huge_sigma() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("rdf.dat");
    write_sine(&input, 20);

    let out = run_cli(&[input.to_str().unwrap(), "--gauss-sigma", "1e30"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("kernel radius"), "stderr: {stderr}");
    assert!(!dir.path().join("rdf_smoothed_gaussian.dat").exists());
}

/// Test that a missing input file is reported.
#[test]
fn test_missing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.dat");

    let out = run_cli(&[input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.dat"));
}
