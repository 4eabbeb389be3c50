use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::token::AuthUser;
use crate::errors::AppError;
use crate::models::interest::InterestRow;
use crate::models::skill::{CatalogSkill, RatedSkill, SkillRow};
use crate::models::student::{AcademicRecord, AcademicRecordRow, StudentRow};
use crate::state::AppState;
use crate::students::queries::{fetch_student_interests, fetch_student_skills, require_student_id};

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/users/student
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<StudentRow>, AppError> {
    let student: Option<StudentRow> = sqlx::query_as(
        "SELECT student_id, name, email, cgpa, graduation_year, department \
         FROM students WHERE user_id = ?",
    )
    .bind(user.user_id)
    .fetch_optional(&state.db)
    .await?;

    student
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Student profile not found".to_string()))
}

/// Partial profile update. Absent fields leave the column untouched; an
/// empty department string clears it to NULL.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub cgpa: Option<f64>,
}

impl UpdateProfileRequest {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.graduation_year.is_none()
            && self.cgpa.is_none()
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// PUT /api/users/student
pub async fn handle_update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<Value>, AppError> {
    let existing: Option<StudentRow> = sqlx::query_as(
        "SELECT student_id, name, email, cgpa, graduation_year, department \
         FROM students WHERE user_id = ?",
    )
    .bind(user.user_id)
    .fetch_optional(&state.db)
    .await?;

    let Some(existing) = existing else {
        // First save creates the profile row.
        sqlx::query(
            "INSERT INTO students (user_id, name, email, department, graduation_year, cgpa) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user.user_id)
        .bind(req.name.unwrap_or_default())
        .bind(req.email.unwrap_or_default())
        .bind(none_if_blank(req.department))
        .bind(req.graduation_year)
        .bind(req.cgpa)
        .execute(&state.db)
        .await?;
        return Ok(Json(
            json!({ "message": "Student profile created successfully" }),
        ));
    };

    if req.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    // Merge provided fields over the current row, then write it back whole.
    let name = req.name.unwrap_or(existing.name);
    let email = req.email.unwrap_or(existing.email);
    let department = match req.department {
        Some(d) => none_if_blank(Some(d)),
        None => existing.department,
    };
    let graduation_year = req.graduation_year.or(existing.graduation_year);
    let cgpa = req.cgpa.or(existing.cgpa);

    sqlx::query(
        "UPDATE students SET name = ?, email = ?, department = ?, graduation_year = ?, cgpa = ? \
         WHERE user_id = ?",
    )
    .bind(name)
    .bind(email)
    .bind(department)
    .bind(graduation_year)
    .bind(cgpa)
    .bind(user.user_id)
    .execute(&state.db)
    .await?;

    Ok(Json(
        json!({ "message": "Student profile updated successfully" }),
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Academic records
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/users/academic-records
pub async fn handle_get_academic_records(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<AcademicRecord>>, AppError> {
    let student_id = require_student_id(&state.db, user.user_id).await?;

    let records: Vec<AcademicRecordRow> = sqlx::query_as(
        "SELECT record_id, term_name, gpa FROM academic_records \
         WHERE student_id = ? ORDER BY term_name DESC",
    )
    .bind(student_id)
    .fetch_all(&state.db)
    .await?;

    let mut enriched = Vec::with_capacity(records.len());
    for record in records {
        let courses: Vec<String> =
            sqlx::query_scalar("SELECT course_name FROM record_courses WHERE record_id = ?")
                .bind(record.record_id)
                .fetch_all(&state.db)
                .await?;
        enriched.push(AcademicRecord {
            record_id: record.record_id,
            term_name: record.term_name,
            gpa: record.gpa,
            courses,
        });
    }

    Ok(Json(enriched))
}

#[derive(Debug, Deserialize)]
pub struct NewAcademicRecord {
    pub term_name: Option<String>,
    pub gpa: Option<f64>,
    #[serde(default)]
    pub courses: Vec<String>,
}

/// POST /api/users/academic-records
pub async fn handle_add_academic_record(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<NewAcademicRecord>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let term_name = req
        .term_name
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Term name is required".to_string()))?;

    let courses: Vec<String> = req
        .courses
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if courses.is_empty() {
        return Err(AppError::Validation(
            "At least one course is required".to_string(),
        ));
    }

    let student_id = require_student_id(&state.db, user.user_id).await?;

    let mut tx = state.db.begin().await?;
    let result = sqlx::query("INSERT INTO academic_records (student_id, term_name, gpa) VALUES (?, ?, ?)")
        .bind(student_id)
        .bind(&term_name)
        .bind(req.gpa)
        .execute(&mut *tx)
        .await?;
    let record_id = result.last_insert_id();

    for course in &courses {
        sqlx::query("INSERT INTO record_courses (record_id, course_name) VALUES (?, ?)")
            .bind(record_id)
            .bind(course)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Academic record added successfully",
            "record_id": record_id
        })),
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Skill assessment
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/users/skills — public skill catalog.
pub async fn handle_get_skill_catalog(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogSkill>>, AppError> {
    let rows: Vec<SkillRow> = sqlx::query_as(
        "SELECT skill_id, skill_name, skill_type FROM skills ORDER BY skill_type, skill_name",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows.into_iter().map(CatalogSkill::from).collect()))
}

/// GET /api/users/student/skills
pub async fn handle_get_student_skills(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<RatedSkill>>, AppError> {
    let student_id = require_student_id(&state.db, user.user_id).await?;
    let rows = fetch_student_skills(&state.db, student_id).await?;
    Ok(Json(rows.into_iter().map(RatedSkill::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct SkillSelection {
    pub id: i64,
    pub level: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceSkillsRequest {
    pub skills: Vec<SkillSelection>,
}

/// POST /api/users/student/skills — replace-all write from the assessment.
pub async fn handle_replace_student_skills(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<ReplaceSkillsRequest>,
) -> Result<Json<Value>, AppError> {
    let student_id = require_student_id(&state.db, user.user_id).await?;

    let mut tx = state.db.begin().await?;
    sqlx::query("DELETE FROM student_skills WHERE student_id = ?")
        .bind(student_id)
        .execute(&mut *tx)
        .await?;
    for skill in &req.skills {
        let level = skill.level.filter(|&l| l != 0).unwrap_or(1);
        sqlx::query(
            "INSERT INTO student_skills (student_id, skill_id, proficiency_level) VALUES (?, ?, ?)",
        )
        .bind(student_id)
        .bind(skill.id)
        .bind(level)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(Json(json!({ "message": "Skills updated successfully" })))
}

// ────────────────────────────────────────────────────────────────────────────
// Interests
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/users/interests — public interest catalog.
pub async fn handle_get_interest_catalog(
    State(state): State<AppState>,
) -> Result<Json<Vec<InterestRow>>, AppError> {
    let rows: Vec<InterestRow> = sqlx::query_as(
        "SELECT interest_id AS id, interest_name AS name, category \
         FROM interests ORDER BY category, interest_name",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/users/student/interests
pub async fn handle_get_student_interests(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<InterestRow>>, AppError> {
    let student_id = require_student_id(&state.db, user.user_id).await?;
    let rows = fetch_student_interests(&state.db, student_id).await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct InterestSelection {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceInterestsRequest {
    pub interests: Vec<InterestSelection>,
}

/// POST /api/users/student/interests — replace-all write.
pub async fn handle_replace_student_interests(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<ReplaceInterestsRequest>,
) -> Result<Json<Value>, AppError> {
    let student_id = require_student_id(&state.db, user.user_id).await?;

    let mut tx = state.db.begin().await?;
    sqlx::query("DELETE FROM student_interests WHERE student_id = ?")
        .bind(student_id)
        .execute(&mut *tx)
        .await?;
    for interest in &req.interests {
        sqlx::query("INSERT INTO student_interests (student_id, interest_id) VALUES (?, ?)")
            .bind(student_id)
            .bind(interest.id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(Json(json!({ "message": "Interests updated successfully" })))
}
