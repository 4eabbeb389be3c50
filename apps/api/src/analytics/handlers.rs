use axum::{extract::State, Json};

use crate::analytics::readiness::{compute_readiness, ReadinessReport};
use crate::auth::token::AuthUser;
use crate::errors::AppError;
use crate::models::student::StudentRow;
use crate::state::AppState;

/// GET /api/analytics
pub async fn handle_get_analytics(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ReadinessReport>, AppError> {
    let student: Option<StudentRow> = sqlx::query_as(
        "SELECT student_id, name, email, cgpa, graduation_year, department \
         FROM students WHERE user_id = ?",
    )
    .bind(user.user_id)
    .fetch_optional(&state.db)
    .await?;
    let student =
        student.ok_or_else(|| AppError::NotFound("Student profile not found".to_string()))?;

    let skills_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM student_skills WHERE student_id = ?")
            .bind(student.student_id)
            .fetch_one(&state.db)
            .await?;

    Ok(Json(compute_readiness(&student, skills_count as u32)))
}
