use sqlx::FromRow;

/// Raw career catalog row. `required_skills` is a comma-separated list and
/// may be NULL in legacy data; conversion to a scorable
/// `matching::scorer::CareerDefinition` validates that.
#[derive(Debug, Clone, FromRow)]
pub struct CareerRow {
    pub career_id: i64,
    pub career_name: String,
    pub required_skills: Option<String>,
    pub description: Option<String>,
}
