use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::token::AuthUser;
use crate::errors::AppError;
use crate::models::mentor::MentorRow;
use crate::state::AppState;

/// GET /api/mentors — directory, best-rated first.
pub async fn handle_get_mentors(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<MentorRow>>, AppError> {
    let mentors: Vec<MentorRow> = sqlx::query_as(
        "SELECT mentor_id, name, title, company, industry, expertise, bio, \
                rating, sessions, availability, image \
         FROM mentors ORDER BY rating DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(mentors))
}

#[derive(Debug, Deserialize)]
pub struct MentorshipRequest {
    pub mentor_id: i64,
    pub message: Option<String>,
}

/// POST /api/mentors/request
pub async fn handle_request_mentorship(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<MentorshipRequest>,
) -> Result<Json<Value>, AppError> {
    sqlx::query(
        "INSERT INTO mentorship_requests (user_id, mentor_id, message, status, created_at) \
         VALUES (?, ?, ?, 'pending', NOW())",
    )
    .bind(user.user_id)
    .bind(req.mentor_id)
    .bind(req.message)
    .execute(&state.db)
    .await?;

    Ok(Json(
        json!({ "message": "Mentorship request sent successfully" }),
    ))
}
