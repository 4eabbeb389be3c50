use serde::Serialize;
use sqlx::FromRow;

/// Interest catalog row; also the response shape (`id`, `name`, `category`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InterestRow {
    pub id: i64,
    pub name: String,
    pub category: String,
}
