//! CSV record loading for skill-gap analysis.
//!
//! Reads the four input record sets from a snapshot directory:
//! `employees.csv`, `role_requirements.csv`, `skill_records.csv`, and
//! `courses.csv`. Headers are required and matched by exact (trimmed)
//! name; arbitrary extra columns are ignored.
//!
//! Only structural problems are fatal: an unreadable or malformed file
//! is [`LoadError::DataLoad`], a missing required column is
//! [`LoadError::Schema`]. Value-level anomalies (a `skill_level` of
//! `"high"`, an empty `weight` cell) load as `None` and flow through
//! the engine as zero severity; they are valid, informative output,
//! not errors.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod reader;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use skillgap_engine::{Course, Employee, RoleRequirement, SkillRecord};

use reader::{numeric, text, TableReader};

/// Input file name for the employee record set.
pub const EMPLOYEES_FILE: &str = "employees.csv";
/// Input file name for the role requirement record set.
pub const ROLE_REQUIREMENTS_FILE: &str = "role_requirements.csv";
/// Input file name for the skill record set.
pub const SKILL_RECORDS_FILE: &str = "skill_records.csv";
/// Input file name for the course catalog.
pub const COURSES_FILE: &str = "courses.csv";

/// Errors surfaced while obtaining the input record sets.
///
/// Both variants are fatal and raised before any join logic runs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The record set cannot be obtained or parsed structurally.
    #[error("cannot load `{table}` from {path}: {source}")]
    DataLoad {
        /// Which record set failed.
        table: &'static str,
        /// The file that was being read.
        path: PathBuf,
        /// Underlying read/parse failure.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the record set's header row.
    #[error("`{table}` is missing required column `{column}`")]
    Schema {
        /// Which record set is malformed.
        table: &'static str,
        /// The missing column.
        column: &'static str,
    },
}

/// The four immutable input record sets of one run.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// One record per employee.
    pub employees: Vec<Employee>,
    /// Expected level per (role, skill).
    pub role_requirements: Vec<RoleRequirement>,
    /// Actually reported skill levels.
    pub skill_records: Vec<SkillRecord>,
    /// The course catalog.
    pub courses: Vec<Course>,
}

/// Loads all four record sets from `dir`.
pub fn load_tables(dir: &Path) -> Result<Tables, LoadError> {
    let tables = Tables {
        employees: load_employees(dir)?,
        role_requirements: load_role_requirements(dir)?,
        skill_records: load_skill_records(dir)?,
        courses: load_courses(dir)?,
    };

    info!(
        employees = tables.employees.len(),
        role_requirements = tables.role_requirements.len(),
        skill_records = tables.skill_records.len(),
        courses = tables.courses.len(),
        "loaded input snapshot"
    );

    Ok(tables)
}

fn load_employees(dir: &Path) -> Result<Vec<Employee>, LoadError> {
    let table = TableReader::open(dir, "employees", EMPLOYEES_FILE)?;
    let employee_id = table.column("employee_id")?;
    let name = table.column("name")?;
    let surname = table.column("surname")?;
    let current_role = table.column("current_role")?;

    Ok(table
        .rows()
        .iter()
        .map(|row| Employee {
            employee_id: text(row, employee_id),
            name: text(row, name),
            surname: text(row, surname),
            current_role: text(row, current_role),
        })
        .collect())
}

fn load_role_requirements(dir: &Path) -> Result<Vec<RoleRequirement>, LoadError> {
    let table = TableReader::open(dir, "role_requirements", ROLE_REQUIREMENTS_FILE)?;
    let role = table.column("role")?;
    let skill_name = table.column("skill_name")?;
    let required_level = table.column("required_level")?;
    // The weight column may be absent entirely; the engine defaults it.
    let weight = table.optional_column("weight");

    Ok(table
        .rows()
        .iter()
        .map(|row| RoleRequirement {
            role: text(row, role),
            skill_name: text(row, skill_name),
            required_level: numeric(table.name(), "required_level", row, Some(required_level)),
            weight: numeric(table.name(), "weight", row, weight),
        })
        .collect())
}

fn load_skill_records(dir: &Path) -> Result<Vec<SkillRecord>, LoadError> {
    let table = TableReader::open(dir, "skill_records", SKILL_RECORDS_FILE)?;
    let employee_id = table.column("employee_id")?;
    let skill_name = table.column("skill_name")?;
    let skill_level = table.column("skill_level")?;

    Ok(table
        .rows()
        .iter()
        .map(|row| SkillRecord {
            employee_id: text(row, employee_id),
            skill_name: text(row, skill_name),
            skill_level: numeric(table.name(), "skill_level", row, Some(skill_level)),
        })
        .collect())
}

fn load_courses(dir: &Path) -> Result<Vec<Course>, LoadError> {
    let table = TableReader::open(dir, "courses", COURSES_FILE)?;
    let course_id = table.column("course_id")?;
    let skill_name = table.column("skill_name")?;
    let course_name = table.column("course_name")?;
    let provider = table.column("provider")?;
    let duration_hours = table.optional_column("duration_hours");
    let modality = table.column("modality")?;

    Ok(table
        .rows()
        .iter()
        .map(|row| Course {
            course_id: text(row, course_id),
            skill_name: text(row, skill_name),
            course_name: text(row, course_name),
            provider: text(row, provider),
            duration_hours: numeric(table.name(), "duration_hours", row, duration_hours),
            modality: text(row, modality),
        })
        .collect())
}
