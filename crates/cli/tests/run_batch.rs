//! CLI integration test for `skillgap run`.
//!
//! Verifies end-to-end argument plumbing: a CSV snapshot in, the four
//! report files out.

use std::fs;
use std::process::Command;

use anyhow::{Context, Result};

#[test]
fn given_snapshot_when_run_then_reports_are_written() -> Result<()> {
    let data_dir = skillgap_test_utils::backend_team_dir()?;
    let out_dir = tempfile::tempdir()?;

    let bin_path = env!("CARGO_BIN_EXE_skillgap");
    let output = Command::new(bin_path)
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("run")
        .arg("--out-dir")
        .arg(out_dir.path())
        .args(["--top-n", "5"])
        .output()
        .context("failed to execute run command")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "run command should succeed\nstdout:\n{stdout}\nstderr:\n{stderr}"
    );

    for file in [
        "gap_details.csv",
        "role_summary.csv",
        "critical_skills.csv",
        "training_recommendations.csv",
    ] {
        let path = out_dir.path().join(file);
        assert!(path.is_file(), "{file} missing");
        assert!(
            stdout.contains(file),
            "run should print the written path for {file}"
        );
    }

    let critical = fs::read_to_string(out_dir.path().join("critical_skills.csv"))?;
    assert_eq!(critical.lines().nth(1), Some("Python,4.0"));

    Ok(())
}

#[test]
fn given_snapshot_when_critical_then_ranking_is_printed() -> Result<()> {
    let data_dir = skillgap_test_utils::backend_team_dir()?;

    let bin_path = env!("CARGO_BIN_EXE_skillgap");
    let output = Command::new(bin_path)
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(["critical", "--top-n", "1"])
        .output()
        .context("failed to execute critical command")?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "skill_name,total_severity");
    assert_eq!(lines[1], "Python,4.0");
    assert_eq!(lines.len(), 2, "top-n 1 should print a single data row");

    Ok(())
}

#[test]
fn given_missing_snapshot_when_run_then_fails_before_reporting() -> Result<()> {
    let empty_dir = tempfile::tempdir()?;

    let bin_path = env!("CARGO_BIN_EXE_skillgap");
    let output = Command::new(bin_path)
        .arg("--data-dir")
        .arg(empty_dir.path())
        .arg("run")
        .output()
        .context("failed to execute run command")?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("employees"),
        "error should name the record set that failed to load, got:\n{stderr}"
    );

    Ok(())
}
