//! Shared test fixtures for skillgap crates.
//!
//! Provides one canonical snapshot, a two-person backend team with a
//! known gap profile, both as typed records and as CSV files written
//! into a temp directory, so unit and integration tests across the
//! workspace assert against the same numbers.

use std::fs;
use std::io;
use std::path::Path;

use skillgap_engine::{Course, Employee, RoleRequirement, SkillRecord};

/// Typed form of the backend-team snapshot.
///
/// Expected gap profile: `E1/Python gap=2 severity=4`, `E1/SQL gap=0`,
/// `E2/Python gap=-1`, and no `E2/SQL` row.
pub struct BackendTeam {
    /// Two backend employees.
    pub employees: Vec<Employee>,
    /// Three recorded skills; E2 never recorded SQL.
    pub skill_records: Vec<SkillRecord>,
    /// Python (level 4, weight 2) and SQL (level 3, weight 1).
    pub role_requirements: Vec<RoleRequirement>,
    /// Two Python courses and one undated SQL course.
    pub courses: Vec<Course>,
}

/// Builds the backend-team snapshot as typed records.
pub fn backend_team() -> BackendTeam {
    BackendTeam {
        employees: vec![
            Employee {
                employee_id: "E1".into(),
                name: "Ana".into(),
                surname: "Garcia".into(),
                current_role: "Backend".into(),
            },
            Employee {
                employee_id: "E2".into(),
                name: "Luis".into(),
                surname: "Perez".into(),
                current_role: "Backend".into(),
            },
        ],
        skill_records: vec![
            SkillRecord {
                employee_id: "E1".into(),
                skill_name: "Python".into(),
                skill_level: Some(2.0),
            },
            SkillRecord {
                employee_id: "E1".into(),
                skill_name: "SQL".into(),
                skill_level: Some(3.0),
            },
            SkillRecord {
                employee_id: "E2".into(),
                skill_name: "Python".into(),
                skill_level: Some(5.0),
            },
        ],
        role_requirements: vec![
            RoleRequirement {
                role: "Backend".into(),
                skill_name: "Python".into(),
                required_level: Some(4.0),
                weight: Some(2.0),
            },
            RoleRequirement {
                role: "Backend".into(),
                skill_name: "SQL".into(),
                required_level: Some(3.0),
                weight: Some(1.0),
            },
        ],
        courses: vec![
            Course {
                course_id: "C1".into(),
                skill_name: "Python".into(),
                course_name: "Python Deep Dive".into(),
                provider: "Acme Academy".into(),
                duration_hours: Some(40.0),
                modality: "online".into(),
            },
            Course {
                course_id: "C2".into(),
                skill_name: "Python".into(),
                course_name: "Python Essentials".into(),
                provider: "Acme Academy".into(),
                duration_hours: Some(16.0),
                modality: "online".into(),
            },
            Course {
                course_id: "C3".into(),
                skill_name: "SQL".into(),
                course_name: "SQL Basics".into(),
                provider: "Query School".into(),
                duration_hours: None,
                modality: "classroom".into(),
            },
        ],
    }
}

/// Writes the backend-team snapshot as the four input CSV files into
/// `dir`, matching what `skillgap-loader` expects.
pub fn write_backend_team_csvs(dir: &Path) -> io::Result<()> {
    fs::write(
        dir.join("employees.csv"),
        "employee_id,name,surname,current_role\n\
         E1,Ana,Garcia,Backend\n\
         E2,Luis,Perez,Backend\n",
    )?;
    fs::write(
        dir.join("role_requirements.csv"),
        "role,skill_name,required_level,weight\n\
         Backend,Python,4,2\n\
         Backend,SQL,3,1\n",
    )?;
    fs::write(
        dir.join("skill_records.csv"),
        "employee_id,skill_name,skill_level\n\
         E1,Python,2\n\
         E1,SQL,3\n\
         E2,Python,5\n",
    )?;
    fs::write(
        dir.join("courses.csv"),
        "course_id,skill_name,course_name,provider,duration_hours,modality\n\
         C1,Python,Python Deep Dive,Acme Academy,40,online\n\
         C2,Python,Python Essentials,Acme Academy,16,online\n\
         C3,SQL,SQL Basics,Query School,,classroom\n",
    )?;
    Ok(())
}

/// Creates a temp directory pre-populated with the backend-team CSVs.
pub fn backend_team_dir() -> io::Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    write_backend_team_csvs(dir.path())?;
    Ok(dir)
}
