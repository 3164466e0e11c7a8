//! Deterministic course matching for unresolved gaps.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{Course, GapRecord, TrainingRecommendation};

/// Attaches one recommended course to every gap row with a positive gap.
///
/// Course choice per skill is deterministic: the course with the
/// smallest `duration_hours` wins, courses without a duration sort after
/// all timed ones, and ties keep the first course in input order. When
/// no course for a skill carries a duration this reduces to "first
/// course listed." Skills with no course at all keep their row with
/// empty course fields. Rows come out sorted by `(employee_id,
/// skill_name)`.
///
/// An empty result is an empty `Vec` of the same record type, never a
/// different shape.
pub fn recommend_training(
    gap_records: &[GapRecord],
    courses: &[Course],
) -> Vec<TrainingRecommendation> {
    let chosen = choose_course_per_skill(courses);

    let mut rows: Vec<TrainingRecommendation> = gap_records
        .iter()
        .filter_map(|row| {
            let gap = row.gap.filter(|gap| *gap > 0.0)?;
            // A defined gap implies the skill was recorded and both
            // levels were numeric.
            let skill_name = row.skill_name.clone()?;
            let skill_level = row.skill_level?;
            let required_level = row.required_level?;
            let course = chosen.get(skill_name.as_str()).copied();

            Some(TrainingRecommendation {
                employee_id: row.employee_id.clone(),
                name: row.name.clone(),
                surname: row.surname.clone(),
                role: row.role.clone(),
                skill_name,
                skill_level,
                required_level,
                gap,
                course_id: course.map(|course| course.course_id.clone()),
                course_name: course.map(|course| course.course_name.clone()),
                provider: course.map(|course| course.provider.clone()),
                duration_hours: course.and_then(|course| course.duration_hours),
                modality: course.map(|course| course.modality.clone()),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        (a.employee_id.as_str(), a.skill_name.as_str())
            .cmp(&(b.employee_id.as_str(), b.skill_name.as_str()))
    });

    debug!(
        gaps = rows.len(),
        skills_with_course = chosen.len(),
        "matched training recommendations"
    );

    rows
}

/// Picks one course per skill: smallest duration first, undated courses
/// last, input order breaking ties.
fn choose_course_per_skill(courses: &[Course]) -> HashMap<&str, &Course> {
    let mut chosen: HashMap<&str, &Course> = HashMap::new();
    for course in courses {
        chosen
            .entry(course.skill_name.as_str())
            .and_modify(|best| {
                if duration_rank(course) < duration_rank(*best) {
                    *best = course;
                }
            })
            .or_insert(course);
    }
    chosen
}

/// Undated courses compare after every timed one; the strict `<` above
/// keeps the earlier course on ties.
fn duration_rank(course: &Course) -> f64 {
    course.duration_hours.unwrap_or(f64::INFINITY)
}
