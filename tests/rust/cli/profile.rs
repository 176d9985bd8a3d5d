//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi Profile.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Profile Tests - Command Line
//!
//! Runs the `zi-profile` binary against the fixtures under `tests/fixtures`.
//!
//! ```bash
//! cargo test --test cli
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use zi_profile::from_json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn zi_profile(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zi-profile"))
        .args(args)
        .output()
        .expect("run zi-profile")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

/// Tests that `version` prints the program name and version.
#[test]
fn test_version_prints_name() {
    let output = zi_profile(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Zi Profile v{}", env!("CARGO_PKG_VERSION"))));
}

/// Tests that `profile` writes both reports under the chosen directory and name.
#[test]
fn test_profile_writes_reports() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let out = dir.path().join("reports");
    let csv = fixture("shops.csv");

    let output = zi_profile(&[
        "profile",
        path_arg(&csv),
        "-o",
        path_arg(&out),
        "-n",
        "shops",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = fs::read_to_string(out.join("shops.json")).expect("json report");
    let report = from_json(&json).expect("parse report");
    assert_eq!(report.n_rows, 5);
    assert_eq!(report.n_cols, 4);

    let md = fs::read_to_string(out.join("shops.md")).expect("markdown report");
    assert!(md.starts_with("# CSV Profiling Report"));
    assert!(md.contains("- **Rows**: 5"));
}

/// Tests that `--show` prints the summary table and `-k` limits top values.
#[test]
fn test_profile_show_and_top_k() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let csv = fixture("shops.csv");

    let output = zi_profile(&[
        "profile",
        path_arg(&csv),
        "-o",
        path_arg(dir.path()),
        "-s",
        "-k",
        "1",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rows: 5 | Columns: 4"));
    assert!(stdout.contains("Column"));
    assert!(stdout.contains("Missing"));

    let json = fs::read_to_string(dir.path().join("report.json")).expect("json report");
    let report = from_json(&json).expect("parse report");
    let city = report.column("city").expect("city").text().expect("text");
    assert_eq!(city.top.len(), 1);
}

/// Tests that a CSV without data rows warns, exits 1 and writes nothing.
#[test]
fn test_header_only_csv_exits_with_failure() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let csv = dir.path().join("empty.csv");
    fs::write(&csv, "a,b\n").expect("write csv");
    let out = dir.path().join("out");

    let output = zi_profile(&["profile", path_arg(&csv), "-o", path_arg(&out)]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no data rows"));
    assert!(!out.join("report.json").exists());
    assert!(!out.join("report.md").exists());
}

/// Tests that a missing input file exits 1 with an error message.
#[test]
fn test_missing_csv_exits_with_error() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let csv = dir.path().join("absent.csv");

    let output = zi_profile(&["profile", path_arg(&csv), "-o", path_arg(dir.path())]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("absent.csv"));
}

/// Tests that an unknown log level is rejected before any work is done.
#[test]
fn test_unknown_log_level_is_rejected() {
    let output = zi_profile(&["--log-level", "verbose", "version"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown log level"));
}
