//! Organization-wide criticality ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{GapRecord, SkillCriticality};

/// Groups gap rows by skill, sums severity, and returns the `top_n`
/// skills with the largest totals.
///
/// Rows without a skill name (the placeholder rows of employees with no
/// records) are excluded from the grouping. The descending sort is
/// stable, so skills with equal totals keep the order in which they
/// first appeared in the gap table. No sign filter is needed: severity
/// is never negative.
pub fn rank_critical_skills(gap_records: &[GapRecord], top_n: usize) -> Vec<SkillCriticality> {
    let mut totals: Vec<SkillCriticality> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in gap_records {
        let Some(skill) = row.skill_name.as_deref() else {
            continue;
        };
        match index.get(skill) {
            Some(&position) => totals[position].total_severity += row.severity,
            None => {
                index.insert(skill, totals.len());
                totals.push(SkillCriticality {
                    skill_name: skill.to_string(),
                    total_severity: row.severity,
                });
            }
        }
    }

    totals.sort_by(|a, b| {
        b.total_severity
            .partial_cmp(&a.total_severity)
            .unwrap_or(Ordering::Equal)
    });
    totals.truncate(top_n);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(skill: Option<&str>, severity: f64) -> GapRecord {
        GapRecord {
            employee_id: "E1".into(),
            name: String::new(),
            surname: String::new(),
            role: "Backend".into(),
            skill_name: skill.map(Into::into),
            skill_level: None,
            required_level: None,
            gap: None,
            weight: 1.0,
            severity,
        }
    }

    #[test]
    fn test_sums_severity_per_skill() {
        let ranked = rank_critical_skills(
            &[
                row(Some("Python"), 4.0),
                row(Some("SQL"), 1.0),
                row(Some("Python"), 2.0),
            ],
            10,
        );

        assert_eq!(ranked[0].skill_name, "Python");
        assert_eq!(ranked[0].total_severity, 6.0);
        assert_eq!(ranked[1].skill_name, "SQL");
        assert_eq!(ranked[1].total_severity, 1.0);
    }

    #[test]
    fn test_descending_order() {
        let ranked = rank_critical_skills(
            &[
                row(Some("A"), 1.0),
                row(Some("B"), 5.0),
                row(Some("C"), 3.0),
            ],
            10,
        );

        let names: Vec<&str> = ranked.iter().map(|r| r.skill_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let ranked = rank_critical_skills(
            &[
                row(Some("Zig"), 2.0),
                row(Some("Ada"), 2.0),
                row(Some("Elm"), 2.0),
            ],
            10,
        );

        let names: Vec<&str> = ranked.iter().map(|r| r.skill_name.as_str()).collect();
        assert_eq!(names, vec!["Zig", "Ada", "Elm"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let ranked = rank_critical_skills(
            &[
                row(Some("A"), 1.0),
                row(Some("B"), 5.0),
                row(Some("C"), 3.0),
            ],
            2,
        );

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].skill_name, "B");
        assert_eq!(ranked[1].skill_name, "C");
    }

    #[test]
    fn test_placeholder_rows_are_excluded() {
        let ranked = rank_critical_skills(&[row(None, 0.0), row(Some("SQL"), 0.0)], 10);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].skill_name, "SQL");
    }

    #[test]
    fn test_zero_severity_skills_still_ranked() {
        // Severity is never negative, so zero totals simply rank last.
        let ranked = rank_critical_skills(&[row(Some("SQL"), 0.0), row(Some("Go"), 1.0)], 10);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].skill_name, "Go");
        assert_eq!(ranked[1].total_severity, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_critical_skills(&[], 10).is_empty());
    }
}
