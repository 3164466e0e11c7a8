//! Flat-table persistence and rendering for skill-gap analysis output.
//!
//! Writes the four derived tables of a run as CSV files with fixed
//! headers, and renders any single table to a CSV or JSON string for
//! stdout printing. Headers are always written explicitly, so an empty
//! table (for example a run without a single positive gap) still
//! carries the full column schema and downstream consumers need no
//! special-casing.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use skillgap_engine::{
    GapRecord, RoleSummary, RunOutput, SkillCriticality, TrainingRecommendation,
};

/// Output file name for the gap detail table.
pub const GAP_DETAILS_FILE: &str = "gap_details.csv";
/// Output file name for the per-role summary.
pub const ROLE_SUMMARY_FILE: &str = "role_summary.csv";
/// Output file name for the criticality ranking.
pub const CRITICAL_SKILLS_FILE: &str = "critical_skills.csv";
/// Output file name for the training recommendations.
pub const TRAINING_RECOMMENDATIONS_FILE: &str = "training_recommendations.csv";

/// Column order of the gap detail table.
pub const GAP_DETAIL_COLUMNS: [&str; 10] = [
    "employee_id",
    "name",
    "surname",
    "role",
    "skill_name",
    "skill_level",
    "required_level",
    "gap",
    "weight",
    "severity",
];

/// Column order of the per-role summary.
pub const ROLE_SUMMARY_COLUMNS: [&str; 4] =
    ["role", "employee_count", "percent_with_gap", "avg_severity"];

/// Column order of the criticality ranking.
pub const CRITICAL_SKILL_COLUMNS: [&str; 2] = ["skill_name", "total_severity"];

/// Column order of the recommendation table.
pub const TRAINING_RECOMMENDATION_COLUMNS: [&str; 13] = [
    "employee_id",
    "name",
    "surname",
    "role",
    "skill_name",
    "skill_level",
    "required_level",
    "gap",
    "course_id",
    "course_name",
    "provider",
    "duration_hours",
    "modality",
];

/// Errors surfaced while persisting or rendering derived tables.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output directory cannot be created.
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        /// The directory that was being created.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// A report file cannot be written.
    #[error("cannot write {path}: {source}")]
    Write {
        /// The file that was being written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: csv::Error,
    },
    /// A table cannot be rendered to a string.
    #[error("cannot render table: {0}")]
    Render(String),
}

/// Persists all four derived tables under `out_dir`, creating the
/// directory if needed. Returns the paths written, in write order.
pub fn write_reports(output: &RunOutput, out_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let paths = vec![
        write_table(
            out_dir.join(GAP_DETAILS_FILE),
            &GAP_DETAIL_COLUMNS,
            &output.gap_details,
        )?,
        write_table(
            out_dir.join(ROLE_SUMMARY_FILE),
            &ROLE_SUMMARY_COLUMNS,
            &output.role_summary,
        )?,
        write_table(
            out_dir.join(CRITICAL_SKILLS_FILE),
            &CRITICAL_SKILL_COLUMNS,
            &output.critical_skills,
        )?,
        write_table(
            out_dir.join(TRAINING_RECOMMENDATIONS_FILE),
            &TRAINING_RECOMMENDATION_COLUMNS,
            &output.recommendations,
        )?,
    ];

    info!(out_dir = %out_dir.display(), files = paths.len(), "wrote analysis reports");

    Ok(paths)
}

/// Renders the gap detail table as CSV.
pub fn render_gap_details(rows: &[GapRecord]) -> Result<String, ReportError> {
    render_csv(&GAP_DETAIL_COLUMNS, rows)
}

/// Renders the per-role summary as CSV.
pub fn render_role_summary(rows: &[RoleSummary]) -> Result<String, ReportError> {
    render_csv(&ROLE_SUMMARY_COLUMNS, rows)
}

/// Renders the criticality ranking as CSV.
pub fn render_critical_skills(rows: &[SkillCriticality]) -> Result<String, ReportError> {
    render_csv(&CRITICAL_SKILL_COLUMNS, rows)
}

/// Renders the recommendation table as CSV.
pub fn render_recommendations(rows: &[TrainingRecommendation]) -> Result<String, ReportError> {
    render_csv(&TRAINING_RECOMMENDATION_COLUMNS, rows)
}

/// Renders any table as pretty-printed JSON.
pub fn render_json<T: Serialize>(rows: &[T]) -> Result<String, ReportError> {
    serde_json::to_string_pretty(rows).map_err(|e| ReportError::Render(e.to_string()))
}

fn write_table<T: Serialize>(
    path: PathBuf,
    columns: &[&str],
    rows: &[T],
) -> Result<PathBuf, ReportError> {
    let write = |source: csv::Error| ReportError::Write {
        path: path.clone(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(write)?;
    writer.write_record(columns).map_err(write)?;
    for row in rows {
        writer.serialize(row).map_err(write)?;
    }
    writer.flush().map_err(|e| write(e.into()))?;

    Ok(path)
}

fn render_csv<T: Serialize>(columns: &[&str], rows: &[T]) -> Result<String, ReportError> {
    let render = |e: csv::Error| ReportError::Render(e.to_string());

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(columns).map_err(render)?;
    for row in rows {
        writer.serialize(row).map_err(render)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Render(e.to_string()))
}
