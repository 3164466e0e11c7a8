//! Per-role rollup of the gap table.

use std::collections::{BTreeMap, HashSet};

use crate::types::{GapRecord, RoleSummary};

/// Rolls the gap table up into one summary row per distinct role,
/// ordered by role name.
///
/// An employee counts as "having a gap" iff at least one of their rows
/// has a defined positive gap. `avg_severity` is the mean over **all**
/// gap rows of the role, not deduplicated per employee: zero-severity
/// rows (no requirement matched, nothing recorded) are included and pull
/// the average down, which is the intended "typical shortfall exposure"
/// reading.
pub fn summarize_roles(gap_records: &[GapRecord]) -> Vec<RoleSummary> {
    #[derive(Default)]
    struct Rollup<'a> {
        employees: HashSet<&'a str>,
        employees_with_gap: HashSet<&'a str>,
        severity_sum: f64,
        row_count: usize,
    }

    let mut roles: BTreeMap<&str, Rollup> = BTreeMap::new();
    for row in gap_records {
        let rollup = roles.entry(row.role.as_str()).or_default();
        rollup.employees.insert(row.employee_id.as_str());
        if row.has_gap() {
            rollup.employees_with_gap.insert(row.employee_id.as_str());
        }
        rollup.severity_sum += row.severity;
        rollup.row_count += 1;
    }

    roles
        .into_iter()
        .map(|(role, rollup)| RoleSummary {
            role: role.to_string(),
            employee_count: rollup.employees.len(),
            percent_with_gap: round_tenth(
                100.0 * rollup.employees_with_gap.len() as f64 / rollup.employees.len() as f64,
            ),
            avg_severity: rollup.severity_sum / rollup.row_count as f64,
        })
        .collect()
}

/// Rounds to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
