//! Career-readiness snapshot for the analytics dashboard. Pure computation
//! over an already-fetched profile row and skill count.

use serde::Serialize;

use crate::models::student::StudentRow;

/// Points per filled profile field (name, department, graduation year, CGPA).
const POINTS_PER_PROFILE_FIELD: u32 = 25;
/// Readiness points per rated skill.
const POINTS_PER_SKILL: u32 = 5;
/// Growth points per rated skill.
const GROWTH_PER_SKILL: u32 = 10;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub readiness_score: u32,
    pub skill_growth: u32,
    pub profile_completion: u32,
    pub skills_count: u32,
}

/// Share of the profile that is filled in, in 0–100.
pub fn profile_completion(student: &StudentRow) -> u32 {
    let filled = [
        !student.name.trim().is_empty(),
        student.department.is_some(),
        student.graduation_year.is_some(),
        student.cgpa.is_some(),
    ]
    .into_iter()
    .filter(|&f| f)
    .count() as u32;
    filled * POINTS_PER_PROFILE_FIELD
}

/// Readiness is profile completion plus 5 points per skill, capped at 100;
/// growth is simply 10 points per skill.
pub fn compute_readiness(student: &StudentRow, skills_count: u32) -> ReadinessReport {
    let profile_completion = profile_completion(student);
    ReadinessReport {
        readiness_score: (profile_completion + skills_count * POINTS_PER_SKILL).min(100),
        skill_growth: skills_count * GROWTH_PER_SKILL,
        profile_completion,
        skills_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(
        name: &str,
        department: Option<&str>,
        graduation_year: Option<i32>,
        cgpa: Option<f64>,
    ) -> StudentRow {
        StudentRow {
            student_id: 1,
            name: name.to_string(),
            email: "student@example.com".to_string(),
            cgpa,
            graduation_year,
            department: department.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_profile_no_skills() {
        let report = compute_readiness(&student("", None, None, None), 0);
        assert_eq!(
            report,
            ReadinessReport {
                readiness_score: 0,
                skill_growth: 0,
                profile_completion: 0,
                skills_count: 0,
            }
        );
    }

    #[test]
    fn test_partial_profile_with_skills() {
        let s = student("Asha", Some("CS"), None, None);
        let report = compute_readiness(&s, 4);
        assert_eq!(report.profile_completion, 50);
        assert_eq!(report.readiness_score, 70);
        assert_eq!(report.skill_growth, 40);
    }

    #[test]
    fn test_readiness_capped_at_100() {
        let s = student("Asha", Some("CS"), Some(2027), Some(3.8));
        let report = compute_readiness(&s, 12);
        assert_eq!(report.profile_completion, 100);
        assert_eq!(report.readiness_score, 100);
        assert_eq!(report.skill_growth, 120);
    }
}
