use sqlx::MySqlPool;

use crate::errors::AppError;
use crate::matching::scorer::{InterestRecord, SkillRecord};
use crate::models::interest::InterestRow;
use crate::models::skill::StudentSkillRow;

/// Resolves the student id for an account, or 404 when the profile has not
/// been created yet.
pub async fn require_student_id(pool: &MySqlPool, user_id: i64) -> Result<i64, AppError> {
    let student_id: Option<i64> =
        sqlx::query_scalar("SELECT student_id FROM students WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    student_id.ok_or_else(|| AppError::NotFound("Student profile not found".to_string()))
}

/// The student's rated skills joined with the catalog.
pub async fn fetch_student_skills(
    pool: &MySqlPool,
    student_id: i64,
) -> Result<Vec<StudentSkillRow>, AppError> {
    Ok(sqlx::query_as(
        r#"
        SELECT s.skill_id, s.skill_name, s.skill_type, ss.proficiency_level
        FROM student_skills ss
        JOIN skills s ON ss.skill_id = s.skill_id
        WHERE ss.student_id = ?
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?)
}

/// The student's selected interests joined with the catalog.
pub async fn fetch_student_interests(
    pool: &MySqlPool,
    student_id: i64,
) -> Result<Vec<InterestRow>, AppError> {
    Ok(sqlx::query_as(
        r#"
        SELECT i.interest_id AS id, i.interest_name AS name, i.category
        FROM student_interests si
        JOIN interests i ON si.interest_id = i.interest_id
        WHERE si.student_id = ?
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?)
}

/// Converts a rated skill row into the scorer's input record. Proficiency is
/// clamped to the 1–4 ordinal scale at this boundary.
pub fn to_skill_record(row: &StudentSkillRow) -> SkillRecord {
    SkillRecord {
        name: row.skill_name.clone(),
        proficiency_level: row.proficiency_level.clamp(1, 4) as u8,
    }
}

/// Converts an interest row into the scorer's input record.
pub fn to_interest_record(row: &InterestRow) -> InterestRecord {
    InterestRecord {
        name: row.name.clone(),
        category: row.category.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_clamped_to_ordinal_scale() {
        let row = StudentSkillRow {
            skill_id: 1,
            skill_name: "SQL".to_string(),
            skill_type: "Technical".to_string(),
            proficiency_level: 9,
        };
        assert_eq!(to_skill_record(&row).proficiency_level, 4);

        let row = StudentSkillRow {
            proficiency_level: 0,
            ..row
        };
        assert_eq!(to_skill_record(&row).proficiency_level, 1);
    }
}
