use serde::Serialize;
use sqlx::FromRow;

/// Mentor directory row, serialized as-is for the directory listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MentorRow {
    #[serde(rename = "id")]
    pub mentor_id: i64,
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    /// Comma-separated expertise areas.
    pub expertise: Option<String>,
    pub bio: Option<String>,
    pub rating: f64,
    pub sessions: i32,
    pub availability: Option<String>,
    pub image: Option<String>,
}
