use serde::Serialize;
use sqlx::FromRow;

/// Catalog skill as stored: `skill_type` is "Technical" or "Soft".
#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub skill_id: i64,
    pub skill_name: String,
    pub skill_type: String,
}

/// A student's rated skill joined with its catalog entry.
#[derive(Debug, Clone, FromRow)]
pub struct StudentSkillRow {
    pub skill_id: i64,
    pub skill_name: String,
    pub skill_type: String,
    pub proficiency_level: i32,
}

/// Catalog skill in the response shape the assessment UI expects.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSkill {
    pub id: i64,
    pub name: String,
    pub category: &'static str,
}

/// Rated skill in the response shape the assessment UI expects.
#[derive(Debug, Clone, Serialize)]
pub struct RatedSkill {
    pub id: i64,
    pub name: String,
    pub category: &'static str,
    pub level: i32,
}

/// Maps the stored skill type to the category label the frontend uses.
pub fn skill_category(skill_type: &str) -> &'static str {
    if skill_type.eq_ignore_ascii_case("technical") {
        "Tech"
    } else {
        "Soft"
    }
}

impl From<SkillRow> for CatalogSkill {
    fn from(row: SkillRow) -> Self {
        CatalogSkill {
            id: row.skill_id,
            name: row.skill_name,
            category: skill_category(&row.skill_type),
        }
    }
}

impl From<StudentSkillRow> for RatedSkill {
    fn from(row: StudentSkillRow) -> Self {
        RatedSkill {
            id: row.skill_id,
            name: row.skill_name,
            category: skill_category(&row.skill_type),
            level: row.proficiency_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_category_mapping() {
        assert_eq!(skill_category("Technical"), "Tech");
        assert_eq!(skill_category("technical"), "Tech");
        assert_eq!(skill_category("Soft"), "Soft");
        assert_eq!(skill_category("anything-else"), "Soft");
    }
}
