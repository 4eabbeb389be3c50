use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Account row. Holds the stored password (bcrypt hash, or plain text for
/// legacy rows), so it is never serialized directly.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub user_id: i64,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}
