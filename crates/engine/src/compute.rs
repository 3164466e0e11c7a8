//! The gap computation itself: a two-stage merge plus a per-row formula.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{Employee, GapRecord, RoleRequirement, SkillRecord};

/// Joins the three input record sets into one gap row per (employee,
/// recorded skill) and computes `gap` and `severity`.
///
/// The merge is two successive left joins: employees onto their skill
/// records, then each resulting row onto the role requirement keyed by
/// `(current_role, skill_name)`. Two consequences are intentional and
/// relied on downstream:
///
/// - a skill recorded by the employee but not required by their role
///   still appears, with `gap` undefined and `severity = 0`;
/// - a skill required by the role but never recorded by the employee
///   produces no row at all.
///
/// Employees without any skill records yield exactly one placeholder row
/// (undefined `skill_name` and `skill_level`). Duplicate requirement keys
/// resolve to the first record in input order. Rows come out in employee
/// input order, records in input order within an employee.
pub fn compute_gaps(
    employees: &[Employee],
    skill_records: &[SkillRecord],
    requirements: &[RoleRequirement],
) -> Vec<GapRecord> {
    let mut records_by_employee: HashMap<&str, Vec<&SkillRecord>> = HashMap::new();
    for record in skill_records {
        records_by_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record);
    }

    // First record wins for duplicate (role, skill) keys.
    let mut requirement_index: HashMap<(&str, &str), &RoleRequirement> = HashMap::new();
    for requirement in requirements {
        requirement_index
            .entry((requirement.role.as_str(), requirement.skill_name.as_str()))
            .or_insert(requirement);
    }

    let mut rows = Vec::with_capacity(skill_records.len().max(employees.len()));
    for employee in employees {
        match records_by_employee.get(employee.employee_id.as_str()) {
            Some(records) => {
                for record in records.iter().copied() {
                    rows.push(gap_row(employee, Some(record), &requirement_index));
                }
            }
            None => rows.push(gap_row(employee, None, &requirement_index)),
        }
    }

    debug!(
        employees = employees.len(),
        skill_records = skill_records.len(),
        gap_rows = rows.len(),
        "computed gap table"
    );

    rows
}

/// Builds one gap row. `record` is `None` for the placeholder row of an
/// employee without skill records; no requirement is resolved in that
/// case.
fn gap_row(
    employee: &Employee,
    record: Option<&SkillRecord>,
    requirement_index: &HashMap<(&str, &str), &RoleRequirement>,
) -> GapRecord {
    let requirement = record.and_then(|record| {
        requirement_index
            .get(&(employee.current_role.as_str(), record.skill_name.as_str()))
            .copied()
    });

    let skill_level = record.and_then(|record| record.skill_level);
    let required_level = requirement.and_then(|requirement| requirement.required_level);

    let gap = match (required_level, skill_level) {
        (Some(required), Some(actual)) => Some(required - actual),
        _ => None,
    };
    let weight = requirement
        .and_then(|requirement| requirement.weight)
        .unwrap_or(1.0);
    let severity = match gap {
        Some(gap) if gap > 0.0 => gap * weight,
        _ => 0.0,
    };

    GapRecord {
        employee_id: employee.employee_id.clone(),
        name: employee.name.clone(),
        surname: employee.surname.clone(),
        role: employee.current_role.clone(),
        skill_name: record.map(|record| record.skill_name.clone()),
        skill_level,
        required_level,
        gap,
        weight,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, role: &str) -> Employee {
        Employee {
            employee_id: id.into(),
            name: format!("{id}-name"),
            surname: format!("{id}-surname"),
            current_role: role.into(),
        }
    }

    fn record(id: &str, skill: &str, level: f64) -> SkillRecord {
        SkillRecord {
            employee_id: id.into(),
            skill_name: skill.into(),
            skill_level: Some(level),
        }
    }

    fn requirement(role: &str, skill: &str, level: f64, weight: Option<f64>) -> RoleRequirement {
        RoleRequirement {
            role: role.into(),
            skill_name: skill.into(),
            required_level: Some(level),
            weight,
        }
    }

    #[test]
    fn test_positive_gap_weighted() {
        let rows = compute_gaps(
            &[employee("E1", "Backend")],
            &[record("E1", "Python", 2.0)],
            &[requirement("Backend", "Python", 4.0, Some(2.0))],
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gap, Some(2.0));
        assert_eq!(rows[0].weight, 2.0);
        assert_eq!(rows[0].severity, 4.0);
    }

    #[test]
    fn test_zero_and_negative_gaps_have_zero_severity() {
        let rows = compute_gaps(
            &[employee("E1", "Backend"), employee("E2", "Backend")],
            &[record("E1", "SQL", 3.0), record("E2", "SQL", 5.0)],
            &[requirement("Backend", "SQL", 3.0, Some(1.0))],
        );

        assert_eq!(rows[0].gap, Some(0.0));
        assert_eq!(rows[0].severity, 0.0);
        assert_eq!(rows[1].gap, Some(-2.0));
        assert_eq!(rows[1].severity, 0.0);
    }

    #[test]
    fn test_unrequired_skill_still_appears_with_undefined_gap() {
        let rows = compute_gaps(
            &[employee("E1", "Backend")],
            &[record("E1", "Photoshop", 5.0)],
            &[requirement("Backend", "Python", 4.0, Some(2.0))],
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].skill_name.as_deref(), Some("Photoshop"));
        assert_eq!(rows[0].gap, None);
        assert_eq!(rows[0].severity, 0.0);
        // No requirement matched, so the weight falls back to 1.
        assert_eq!(rows[0].weight, 1.0);
    }

    #[test]
    fn test_required_but_unrecorded_skill_is_invisible() {
        // E2 never recorded SQL: no E2/SQL row may be synthesized.
        let rows = compute_gaps(
            &[employee("E2", "Backend")],
            &[record("E2", "Python", 5.0)],
            &[
                requirement("Backend", "Python", 4.0, Some(2.0)),
                requirement("Backend", "SQL", 3.0, Some(1.0)),
            ],
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].skill_name.as_deref(), Some("Python"));
    }

    #[test]
    fn test_employee_without_records_gets_placeholder_row() {
        let rows = compute_gaps(
            &[employee("E9", "Backend")],
            &[],
            &[requirement("Backend", "Python", 4.0, Some(2.0))],
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_id, "E9");
        assert_eq!(rows[0].skill_name, None);
        assert_eq!(rows[0].skill_level, None);
        assert_eq!(rows[0].gap, None);
        assert_eq!(rows[0].severity, 0.0);
        assert_eq!(rows[0].weight, 1.0);
    }

    #[test]
    fn test_missing_weight_defaults_to_one() {
        let rows = compute_gaps(
            &[employee("E1", "Backend")],
            &[record("E1", "Python", 1.0)],
            &[requirement("Backend", "Python", 4.0, None)],
        );

        assert_eq!(rows[0].weight, 1.0);
        assert_eq!(rows[0].severity, 3.0);
    }

    #[test]
    fn test_undefined_skill_level_undefines_gap() {
        let rows = compute_gaps(
            &[employee("E1", "Backend")],
            &[SkillRecord {
                employee_id: "E1".into(),
                skill_name: "Python".into(),
                skill_level: None,
            }],
            &[requirement("Backend", "Python", 4.0, Some(2.0))],
        );

        assert_eq!(rows[0].required_level, Some(4.0));
        assert_eq!(rows[0].gap, None);
        assert_eq!(rows[0].severity, 0.0);
    }

    #[test]
    fn test_undefined_required_level_undefines_gap() {
        let rows = compute_gaps(
            &[employee("E1", "Backend")],
            &[record("E1", "Python", 2.0)],
            &[RoleRequirement {
                role: "Backend".into(),
                skill_name: "Python".into(),
                required_level: None,
                weight: Some(2.0),
            }],
        );

        assert_eq!(rows[0].gap, None);
        assert_eq!(rows[0].severity, 0.0);
        // The requirement matched, so its weight is still copied.
        assert_eq!(rows[0].weight, 2.0);
    }

    #[test]
    fn test_duplicate_requirement_keys_first_wins() {
        let rows = compute_gaps(
            &[employee("E1", "Backend")],
            &[record("E1", "Python", 1.0)],
            &[
                requirement("Backend", "Python", 4.0, Some(2.0)),
                requirement("Backend", "Python", 9.0, Some(9.0)),
            ],
        );

        assert_eq!(rows[0].required_level, Some(4.0));
        assert_eq!(rows[0].weight, 2.0);
    }

    #[test]
    fn test_requirement_for_other_role_does_not_match() {
        let rows = compute_gaps(
            &[employee("E1", "Frontend")],
            &[record("E1", "Python", 2.0)],
            &[requirement("Backend", "Python", 4.0, Some(2.0))],
        );

        assert_eq!(rows[0].required_level, None);
        assert_eq!(rows[0].gap, None);
    }

    #[test]
    fn test_rows_preserve_input_order() {
        let rows = compute_gaps(
            &[employee("E2", "Backend"), employee("E1", "Backend")],
            &[
                record("E1", "SQL", 3.0),
                record("E2", "Python", 5.0),
                record("E1", "Python", 2.0),
            ],
            &[],
        );

        let order: Vec<(&str, Option<&str>)> = rows
            .iter()
            .map(|row| (row.employee_id.as_str(), row.skill_name.as_deref()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("E2", Some("Python")),
                ("E1", Some("SQL")),
                ("E1", Some("Python")),
            ]
        );
    }

    #[test]
    fn test_severity_never_negative() {
        let rows = compute_gaps(
            &[employee("E1", "Backend"), employee("E2", "Backend")],
            &[
                record("E1", "Python", 9.0),
                record("E2", "Python", 0.5),
                record("E2", "Go", 3.0),
            ],
            &[requirement("Backend", "Python", 4.0, Some(2.0))],
        );

        assert!(rows.iter().all(|row| row.severity >= 0.0));
    }
}
