//! Career-match scorer — pure, deterministic scoring of a student's skills
//! and interests against the career catalog.
//!
//! No I/O: the handler fetches rows, converts them, and calls
//! [`recommend_careers`]. Every invocation works on its own inputs and
//! produces a fresh result, so concurrent requests need no coordination.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::models::career::CareerRow;

/// Maximum number of recommendations returned per request.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Points added per matched skill before the proficiency bonus.
const SKILL_MATCH_BASE: u32 = 10;
/// Points per proficiency level (1–4) on top of the base.
const PROFICIENCY_BONUS: u32 = 5;
/// Flat bonus for each interest that matches the career name or description.
const INTEREST_BONUS: u32 = 15;
/// Normalization denominator per required-skill token.
const POINTS_PER_REQUIREMENT: f64 = 15.0;
/// Any career with at least one matched skill scores no lower than this.
const MATCH_FLOOR: u32 = 20;

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models
// ────────────────────────────────────────────────────────────────────────────

/// One self-rated skill. Proficiency is ordinal: 1=Beginner … 4=Expert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub proficiency_level: u8,
}

/// One career-interest selection. Membership is boolean; no proficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRecord {
    pub name: String,
    pub category: String,
}

/// A validated career catalog entry. `required_skills` is the raw
/// comma-separated string; it is tokenized during scoring.
#[derive(Debug, Clone)]
pub struct CareerDefinition {
    pub id: i64,
    pub name: String,
    pub required_skills: String,
    pub description: Option<String>,
}

/// A scored career, ready for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub title: String,
    /// Normalized match percentage, always in 0–100.
    pub match_score: u32,
    pub description: Option<String>,
    /// Required skills as listed in the catalog, trimmed, original case.
    pub required_skills: Vec<String>,
    /// Student skill names that satisfied at least one requirement token.
    pub matched_skills: Vec<String>,
}

/// Scoring input that cannot be accepted. The caller decides whether to skip
/// the offending record or surface a data-integrity error.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("career {career_id} ({career_name}) has no required_skills value")]
    MissingRequiredSkills { career_id: i64, career_name: String },
}

impl TryFrom<CareerRow> for CareerDefinition {
    type Error = MatchError;

    /// Validates a raw catalog row at the boundary. A NULL `required_skills`
    /// column is malformed catalog data, not an empty requirement list.
    fn try_from(row: CareerRow) -> Result<Self, Self::Error> {
        let required_skills =
            row.required_skills
                .ok_or_else(|| MatchError::MissingRequiredSkills {
                    career_id: row.career_id,
                    career_name: row.career_name.clone(),
                })?;
        Ok(CareerDefinition {
            id: row.career_id,
            name: row.career_name,
            required_skills,
            description: row.description,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matching predicates and parsing
// ────────────────────────────────────────────────────────────────────────────

/// Bidirectional, case-insensitive substring match between a student skill
/// and one required-skill token. Both arguments must already be lower-cased.
///
/// Deliberately permissive: "sql" matches "postgresql" and vice versa. This
/// over-matching is a feature of the heuristic, not a bug to tighten.
pub fn skill_matches_requirement(skill_name: &str, requirement_token: &str) -> bool {
    requirement_token == skill_name
        || skill_name.contains(requirement_token)
        || requirement_token.contains(skill_name)
}

/// Tokenizes a comma-separated requirement string into lower-cased, trimmed
/// tokens. An empty string yields no tokens; whitespace between commas is
/// kept as an (empty) token, matching how the catalog has always been read.
pub fn parse_required_skills(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|t| t.trim().to_lowercase()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a single career. Returns `None` when the career has no
/// required-skill tokens (no match basis, never recommended).
pub fn score_career(
    career: &CareerDefinition,
    skills: &[SkillRecord],
    interests: &[InterestRecord],
) -> Option<Recommendation> {
    let tokens = parse_required_skills(&career.required_skills);
    if tokens.is_empty() {
        return None;
    }

    let mut score: u32 = 0;
    let mut matched_skills: Vec<String> = Vec::new();
    // A skill counts once per career, even when it matches several tokens
    // or appears twice in the input.
    let mut seen: HashSet<String> = HashSet::new();

    for skill in skills {
        let skill_name = skill.name.to_lowercase();
        if seen.contains(&skill_name) {
            continue;
        }
        if tokens
            .iter()
            .any(|token| skill_matches_requirement(&skill_name, token))
        {
            seen.insert(skill_name);
            matched_skills.push(skill.name.clone());
            score += SKILL_MATCH_BASE + u32::from(skill.proficiency_level) * PROFICIENCY_BONUS;
        }
    }

    let career_name = career.name.to_lowercase();
    let career_desc = career
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    for interest in interests {
        let interest_name = interest.name.to_lowercase();
        if career_name.contains(&interest_name) || career_desc.contains(&interest_name) {
            // Each qualifying interest adds its own bonus; no per-career cap
            // before the final clamp.
            score += INTEREST_BONUS;
        }
    }

    let raw_percentage =
        (f64::from(score) / (tokens.len() as f64 * POINTS_PER_REQUIREMENT) * 100.0).round() as u32;
    let mut match_score = raw_percentage.min(100);

    // Policy overrides, in order: any real skill match earns at least the
    // floor; no skill match forces zero no matter how many interests hit.
    if !matched_skills.is_empty() && match_score < MATCH_FLOOR {
        match_score = MATCH_FLOOR;
    }
    if matched_skills.is_empty() {
        match_score = 0;
    }

    Some(Recommendation {
        id: career.id,
        title: career.name.clone(),
        match_score,
        description: career.description.clone(),
        required_skills: career
            .required_skills
            .split(',')
            .map(|t| t.trim().to_string())
            .collect(),
        matched_skills,
    })
}

/// Scores every career independently, drops zero scores, sorts descending by
/// score (stable: ties keep catalog order), and caps the result at
/// [`MAX_RECOMMENDATIONS`].
pub fn recommend_careers(
    skills: &[SkillRecord],
    interests: &[InterestRecord],
    careers: &[CareerDefinition],
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = careers
        .iter()
        .filter_map(|career| score_career(career, skills, interests))
        .filter(|r| r.match_score > 0)
        .collect();
    recommendations.sort_by_key(|r| std::cmp::Reverse(r.match_score));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: u8) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            proficiency_level: level,
        }
    }

    fn interest(name: &str) -> InterestRecord {
        InterestRecord {
            name: name.to_string(),
            category: "Technology".to_string(),
        }
    }

    fn career(id: i64, name: &str, required: &str, description: &str) -> CareerDefinition {
        CareerDefinition {
            id,
            name: name.to_string(),
            required_skills: required.to_string(),
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn test_empty_required_skills_never_recommended() {
        let c = career(1, "Generalist", "", "Does everything");
        let skills = vec![skill("JavaScript", 4)];
        let interests = vec![interest("generalist")];
        assert!(score_career(&c, &skills, &interests).is_none());
    }

    #[test]
    fn test_concrete_frontend_scenario() {
        // 1 matched skill at level 3: score = 10 + 3*5 = 25,
        // percentage = round(25 / (3*15) * 100) = round(55.6) = 56.
        let c = career(
            7,
            "Frontend Developer",
            "JavaScript, React, HTML",
            "Build UIs",
        );
        let rec = score_career(&c, &[skill("JavaScript", 3)], &[]).unwrap();
        assert_eq!(rec.match_score, 56);
        assert_eq!(rec.matched_skills, vec!["JavaScript"]);
        assert_eq!(rec.required_skills, vec!["JavaScript", "React", "HTML"]);
    }

    #[test]
    fn test_no_substring_overlap_scores_zero() {
        let c = career(2, "Backend Developer", "Node.js, SQL, Java", "Server work");
        let rec = score_career(&c, &[skill("Python", 1)], &[]).unwrap();
        assert_eq!(rec.match_score, 0);
        assert!(rec.matched_skills.is_empty());
        // And post-processing drops it.
        let out = recommend_careers(&[skill("Python", 1)], &[], &[c]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_interest_bonus_alone_cannot_recommend() {
        // Interest name substring-matches the description, but with no
        // matched skills the score is forced to zero.
        let c = career(
            3,
            "Data Scientist",
            "Python, Statistics",
            "Handles data science workflows",
        );
        let rec = score_career(&c, &[], &[interest("Data Science")]).unwrap();
        assert_eq!(rec.match_score, 0);
        let out = recommend_careers(&[], &[interest("Data Science")], &[c]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_match_floor_applies_when_any_skill_matched() {
        // 1 match at level 1 over 6 requirements: 15 / 90 = 16.7% → floored.
        let c = career(
            4,
            "Platform Engineer",
            "Go, Rust, Kubernetes, Terraform, AWS, Linux",
            "Infra",
        );
        let rec = score_career(&c, &[skill("Rust", 1)], &[]).unwrap();
        assert_eq!(rec.match_score, 20);
    }

    #[test]
    fn test_score_clamped_to_100() {
        // One requirement, expert skill, plus interest bonuses well past 100%.
        let c = career(5, "Web Developer", "JavaScript", "Web development work");
        let interests = vec![interest("web"), interest("development")];
        let rec = score_career(&c, &[skill("JavaScript", 4)], &interests).unwrap();
        assert_eq!(rec.match_score, 100);
    }

    #[test]
    fn test_bidirectional_substring_matching() {
        assert!(skill_matches_requirement("sql", "postgresql"));
        assert!(skill_matches_requirement("postgresql", "sql"));
        assert!(skill_matches_requirement("react", "react"));
        assert!(!skill_matches_requirement("python", "java"));
    }

    #[test]
    fn test_skill_counted_once_per_career() {
        // "SQL" substring-matches two tokens; it must contribute only once.
        let c = career(6, "Data Engineer", "PostgreSQL, MySQL, Python", "Pipelines");
        let rec = score_career(&c, &[skill("SQL", 2)], &[]).unwrap();
        // 10 + 2*5 = 20 over 3*15 = 45 → 44%.
        assert_eq!(rec.match_score, 44);
        assert_eq!(rec.matched_skills, vec!["SQL"]);
    }

    #[test]
    fn test_duplicate_input_skill_counted_once() {
        let c = career(6, "Frontend Developer", "JavaScript, React", "UIs");
        let skills = vec![skill("React", 3), skill("react", 4)];
        let rec = score_career(&c, &skills, &[]).unwrap();
        assert_eq!(rec.matched_skills.len(), 1);
        // Only the first occurrence scores: 10 + 3*5 = 25 over 30 → 83%.
        assert_eq!(rec.match_score, 83);
    }

    #[test]
    fn test_output_sorted_capped_and_positive() {
        let careers: Vec<CareerDefinition> = (0..8)
            .map(|i| {
                career(
                    i,
                    &format!("Career {i}"),
                    "JavaScript, React, HTML",
                    "desc",
                )
            })
            .chain(std::iter::once(career(
                99,
                "Unrelated",
                "Welding, Carpentry",
                "Trades",
            )))
            .collect();
        let out = recommend_careers(&[skill("JavaScript", 3)], &[], &careers);
        assert_eq!(out.len(), MAX_RECOMMENDATIONS);
        for pair in out.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        for rec in &out {
            assert!(rec.match_score > 0 && rec.match_score <= 100);
            assert!(!rec.matched_skills.is_empty());
        }
        // Ties keep catalog order.
        let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_inputs_yield_empty_output() {
        assert!(recommend_careers(&[], &[], &[]).is_empty());
        let c = career(1, "Frontend Developer", "JavaScript", "UIs");
        assert!(recommend_careers(&[], &[], &[c]).is_empty());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let careers = vec![
            career(1, "Frontend Developer", "JavaScript, React, HTML", "UIs"),
            career(2, "Full Stack Developer", "JavaScript, Node.js, SQL", "Both"),
        ];
        let skills = vec![skill("JavaScript", 3), skill("SQL", 2)];
        let interests = vec![interest("Web Development")];
        let first = recommend_careers(&skills, &interests, &careers);
        let second = recommend_careers(&skills, &interests, &careers);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_null_required_skills_is_invalid_input() {
        let row = CareerRow {
            career_id: 12,
            career_name: "Mystery Role".to_string(),
            required_skills: None,
            description: None,
        };
        let err = CareerDefinition::try_from(row).unwrap_err();
        assert!(matches!(
            err,
            MatchError::MissingRequiredSkills { career_id: 12, .. }
        ));
    }

    #[test]
    fn test_recommendation_json_shape() {
        let c = career(7, "Frontend Developer", "JavaScript, React", "UIs");
        let rec = score_career(&c, &[skill("JavaScript", 3)], &[]).unwrap();
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("matchScore").is_some());
        assert!(json.get("requiredSkills").is_some());
        assert!(json.get("matchedSkills").is_some());
        assert_eq!(json["title"], "Frontend Developer");
    }
}
