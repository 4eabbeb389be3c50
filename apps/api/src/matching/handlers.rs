//! Recommendation endpoint — the thin collaborator around the pure scorer:
//! fetch the student's snapshot and the catalog, validate rows, score.

use axum::{extract::State, Json};
use tracing::warn;

use crate::auth::token::AuthUser;
use crate::errors::AppError;
use crate::matching::scorer::{recommend_careers, CareerDefinition, Recommendation};
use crate::models::career::CareerRow;
use crate::state::AppState;
use crate::students::queries::{
    fetch_student_interests, fetch_student_skills, require_student_id, to_interest_record,
    to_skill_record,
};

/// GET /api/career/recommendations
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let student_id = require_student_id(&state.db, user.user_id).await?;

    let skills: Vec<_> = fetch_student_skills(&state.db, student_id)
        .await?
        .iter()
        .map(to_skill_record)
        .collect();
    let interests: Vec<_> = fetch_student_interests(&state.db, student_id)
        .await?
        .iter()
        .map(to_interest_record)
        .collect();

    let rows: Vec<CareerRow> =
        sqlx::query_as("SELECT career_id, career_name, required_skills, description FROM careers")
            .fetch_all(&state.db)
            .await?;

    // Rows that fail boundary validation are data-integrity problems in the
    // catalog, not in this request; skip them and keep scoring the rest.
    let mut careers = Vec::with_capacity(rows.len());
    for row in rows {
        match CareerDefinition::try_from(row) {
            Ok(career) => careers.push(career),
            Err(e) => warn!("Skipping unscorable career row: {e}"),
        }
    }

    Ok(Json(recommend_careers(&skills, &interests, &careers)))
}
