//! Skill-gap computation over employee, role, and course records.
//!
//! This crate is the pure core of the analysis: it joins the input
//! record sets into one gap row per (employee, recorded skill) and
//! derives the three downstream tables from that shared gap table:
//! - per-role summaries ([`summarize_roles`]),
//! - the organization-wide criticality ranking ([`rank_critical_skills`]),
//! - one recommended course per unresolved gap ([`recommend_training`]).
//!
//! All functions are synchronous, side-effect free, and deterministic
//! for fixed inputs; I/O lives in the loader and report crates. Value
//! anomalies never raise here: unknown levels and weights arrive as
//! `None` and contribute zero severity.
//!
//! # Example
//!
//! ```
//! use skillgap_engine::{compute_gaps, Employee, RoleRequirement, SkillRecord};
//!
//! let employees = vec![Employee {
//!     employee_id: "E1".into(),
//!     name: "Ada".into(),
//!     surname: "Lovelace".into(),
//!     current_role: "Backend".into(),
//! }];
//! let records = vec![SkillRecord {
//!     employee_id: "E1".into(),
//!     skill_name: "Python".into(),
//!     skill_level: Some(2.0),
//! }];
//! let requirements = vec![RoleRequirement {
//!     role: "Backend".into(),
//!     skill_name: "Python".into(),
//!     required_level: Some(4.0),
//!     weight: Some(2.0),
//! }];
//!
//! let gaps = compute_gaps(&employees, &records, &requirements);
//! assert_eq!(gaps[0].severity, 4.0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod compute;
pub mod rank;
pub mod recommend;
pub mod summary;
pub mod types;

pub use compute::compute_gaps;
pub use rank::rank_critical_skills;
pub use recommend::recommend_training;
pub use summary::summarize_roles;
pub use types::{
    Course, Employee, GapRecord, RoleRequirement, RoleSummary, RunOutput, SkillCriticality,
    SkillRecord, TrainingRecommendation,
};

/// Ranking depth used when the caller does not configure one.
pub const DEFAULT_TOP_N: usize = 10;

/// Runs the full batch: gap table plus the three derived tables.
///
/// Convenience wrapper over [`compute_gaps`] and its three consumers;
/// the consumers are order-insensitive and each reads the same immutable
/// gap table.
pub fn analyze(
    employees: &[Employee],
    skill_records: &[SkillRecord],
    requirements: &[RoleRequirement],
    courses: &[Course],
    top_n: usize,
) -> RunOutput {
    let gap_details = compute_gaps(employees, skill_records, requirements);
    let role_summary = summarize_roles(&gap_details);
    let critical_skills = rank_critical_skills(&gap_details, top_n);
    let recommendations = recommend_training(&gap_details, courses);

    RunOutput {
        gap_details,
        role_summary,
        critical_skills,
        recommendations,
    }
}
