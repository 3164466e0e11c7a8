//! Input record sets and the derived tables of one run.

use serde::{Deserialize, Serialize};

/// An employee as supplied by the input snapshot. Immutable per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee key.
    pub employee_id: String,
    /// First name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// The role this employee currently holds.
    pub current_role: String,
}

/// The level a role expects for one skill.
///
/// Keyed by `(role, skill_name)`; when the input carries duplicate keys,
/// the first record in input order wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// Role the requirement applies to.
    pub role: String,
    /// Skill the requirement applies to.
    pub skill_name: String,
    /// Expected proficiency level. `None` when the cell was missing or
    /// non-numeric.
    pub required_level: Option<f64>,
    /// Relative importance of the skill for the role. `None` falls back
    /// to 1 during gap computation.
    pub weight: Option<f64>,
}

/// A skill an employee has actually reported.
///
/// Absence of a record means "not evaluated," not "zero skill."
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Employee the record belongs to.
    pub employee_id: String,
    /// Reported skill.
    pub skill_name: String,
    /// Reported proficiency level, `None` when missing or non-numeric.
    pub skill_level: Option<f64>,
}

/// A training course on offer for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course key.
    pub course_id: String,
    /// Skill the course teaches.
    pub skill_name: String,
    /// Display name.
    pub course_name: String,
    /// Provider / vendor.
    pub provider: String,
    /// Length in hours, `None` when unknown.
    pub duration_hours: Option<f64>,
    /// Delivery mode (online, classroom, ...).
    pub modality: String,
}

/// One row of the derived gap table: an employee paired with a skill the
/// employee has an actual record for.
///
/// Recomputed every run; carries no persistent identity. An employee with
/// zero skill records still yields exactly one row, with `skill_name` and
/// `skill_level` undefined, so the employee stays visible in role
/// summaries without contributing severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapRecord {
    /// Employee key.
    pub employee_id: String,
    /// Employee first name.
    pub name: String,
    /// Employee family name.
    pub surname: String,
    /// The employee's current role.
    pub role: String,
    /// Recorded skill; `None` for the placeholder row of an employee
    /// without any skill records.
    pub skill_name: Option<String>,
    /// Recorded level for the skill.
    pub skill_level: Option<f64>,
    /// Level the role requires, `None` when the role has no matching
    /// requirement.
    pub required_level: Option<f64>,
    /// `required_level - skill_level`; `None` unless both sides are
    /// numeric.
    pub gap: Option<f64>,
    /// Requirement weight, defaulted to 1 when no matching requirement
    /// supplied a numeric one. Never undefined in output.
    pub weight: f64,
    /// `gap * weight` for positive gaps, otherwise 0. Never negative.
    pub severity: f64,
}

impl GapRecord {
    /// Whether this row represents an actual shortfall.
    pub fn has_gap(&self) -> bool {
        self.gap.is_some_and(|gap| gap > 0.0)
    }
}

/// Per-role rollup of the gap table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    /// Role name.
    pub role: String,
    /// Distinct employees holding the role.
    pub employee_count: usize,
    /// Share of those employees with at least one positive gap, as a
    /// percentage rounded to one decimal.
    pub percent_with_gap: f64,
    /// Mean severity across all gap rows of the role, zero-severity rows
    /// included.
    pub avg_severity: f64,
}

/// One entry of the organization-wide criticality ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCriticality {
    /// Skill name.
    pub skill_name: String,
    /// Sum of severity across every gap row for the skill.
    pub total_severity: f64,
}

/// A gap row with a positive gap, augmented with the chosen course.
///
/// Course fields are `None` when no course exists for the skill; the row
/// is kept rather than dropped. A positive gap implies both levels were
/// numeric, so they are carried unwrapped here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRecommendation {
    /// Employee key.
    pub employee_id: String,
    /// Employee first name.
    pub name: String,
    /// Employee family name.
    pub surname: String,
    /// The employee's current role.
    pub role: String,
    /// The skill with the shortfall.
    pub skill_name: String,
    /// Recorded level.
    pub skill_level: f64,
    /// Required level.
    pub required_level: f64,
    /// The shortfall, always positive.
    pub gap: f64,
    /// Chosen course key, `None` when the skill has no course.
    pub course_id: Option<String>,
    /// Chosen course name.
    pub course_name: Option<String>,
    /// Chosen course provider.
    pub provider: Option<String>,
    /// Chosen course length in hours.
    pub duration_hours: Option<f64>,
    /// Chosen course delivery mode.
    pub modality: Option<String>,
}

/// The four derived tables produced by one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    /// One row per (employee, recorded skill).
    pub gap_details: Vec<GapRecord>,
    /// Per-role rollup.
    pub role_summary: Vec<RoleSummary>,
    /// Top-N skills by total severity.
    pub critical_skills: Vec<SkillCriticality>,
    /// One recommended course per unresolved gap.
    pub recommendations: Vec<TrainingRecommendation>,
}
