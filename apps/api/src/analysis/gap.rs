//! Gap analysis — normalizes a user's skill set against a role's requirements.
//!
//! Pure and deterministic: safe to recompute on every input change. The
//! result is always rebuilt from scratch, never patched in place.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::SkillCatalog;
use crate::models::role::RoleDefinition;
use crate::models::skill::SkillCategory;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Missing skills grouped by catalog category. All four buckets are always
/// present on the wire; a missing id with no catalog row lands in none of
/// them (it still counts in `missing_skills` and in the readiness
/// denominator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingSkillsByCategory {
    pub language: Vec<String>,
    pub framework: Vec<String>,
    pub tool: Vec<String>,
    pub soft: Vec<String>,
}

impl MissingSkillsByCategory {
    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Language => &mut self.language,
            SkillCategory::Framework => &mut self.framework,
            SkillCategory::Tool => &mut self.tool,
            SkillCategory::Soft => &mut self.soft,
        }
    }
}

/// Full analysis result consumed by the timeline, resource, and project
/// selectors as well as the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysisResult {
    pub role_id: String,
    /// User tokens deduplicated in first-occurrence order. Unknown ids are
    /// kept — they simply never match a requirement.
    pub normalized_user_skills: Vec<String>,
    /// Required skills the user has, in the role's requirement order.
    pub matched_skills: Vec<String>,
    /// Required skills the user lacks, in the role's requirement order.
    pub missing_skills: Vec<String>,
    /// round(100 · matched / required); 100 when the role requires nothing.
    pub readiness_percent: u8,
    pub missing_skills_by_category: MissingSkillsByCategory,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes raw user skill tokens against a role's weighted requirements.
///
/// Tokens are compared by exact id equality — alias resolution belongs to
/// the input-suggestion stage, not here. `matched_skills` and
/// `missing_skills` partition the role's required skill ids exactly.
pub fn analyze_gaps(
    user_skills: &[String],
    role: &RoleDefinition,
    catalog: &SkillCatalog,
) -> GapAnalysisResult {
    // Dedupe preserving first-occurrence order.
    let mut seen = HashSet::new();
    let normalized: Vec<String> = user_skills
        .iter()
        .filter(|token| seen.insert(token.as_str()))
        .cloned()
        .collect();

    let user_set: HashSet<&str> = normalized.iter().map(String::as_str).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for req in &role.required_skills {
        if user_set.contains(req.skill_id.as_str()) {
            matched.push(req.skill_id.clone());
        } else {
            missing.push(req.skill_id.clone());
        }
    }

    let readiness_percent = if role.required_skills.is_empty() {
        100
    } else {
        (matched.len() as f64 / role.required_skills.len() as f64 * 100.0).round() as u8
    };

    let mut by_category = MissingSkillsByCategory::default();
    for skill_id in &missing {
        // Ids absent from the catalog are omitted from the category view
        // only — they stay in `missing_skills` and in the denominator.
        if let Some(skill) = catalog.get(skill_id) {
            by_category.bucket_mut(skill.category).push(skill_id.clone());
        }
    }

    GapAnalysisResult {
        role_id: role.id.clone(),
        normalized_user_skills: normalized,
        matched_skills: matched,
        missing_skills: missing,
        readiness_percent,
        missing_skills_by_category: by_category,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::RoleSkillRequirement;

    fn make_role(requirements: &[(&str, u8)]) -> RoleDefinition {
        RoleDefinition {
            id: "test-role".to_string(),
            name: "Test Role".to_string(),
            description: "A role for tests".to_string(),
            responsibilities: vec![],
            required_skills: requirements
                .iter()
                .map(|(id, importance)| RoleSkillRequirement {
                    skill_id: id.to_string(),
                    importance: *importance,
                })
                .collect(),
        }
    }

    fn catalog() -> SkillCatalog {
        SkillCatalog::load().unwrap()
    }

    fn tokens(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_worked_example_python_sql_git() {
        // role requires {python:3, sql:2, git:1}; user has {python, git}
        let role = make_role(&[("python", 3), ("sql", 2), ("git", 1)]);
        let result = analyze_gaps(&tokens(&["python", "git"]), &role, &catalog());

        assert_eq!(result.matched_skills, vec!["python", "git"]);
        assert_eq!(result.missing_skills, vec!["sql"]);
        assert_eq!(result.readiness_percent, 67);
        assert_eq!(result.missing_skills_by_category.language, vec!["sql"]);
    }

    #[test]
    fn test_matched_and_missing_partition_requirements() {
        let role = make_role(&[("html", 3), ("css", 3), ("react", 2), ("git", 1)]);
        let result = analyze_gaps(&tokens(&["css", "git", "docker"]), &role, &catalog());

        let mut union: Vec<&str> = result
            .matched_skills
            .iter()
            .chain(result.missing_skills.iter())
            .map(String::as_str)
            .collect();
        union.sort_unstable();
        let mut required: Vec<&str> = role
            .required_skills
            .iter()
            .map(|r| r.skill_id.as_str())
            .collect();
        required.sort_unstable();
        assert_eq!(union, required);

        for id in &result.matched_skills {
            assert!(!result.missing_skills.contains(id), "{id} in both sets");
        }
    }

    #[test]
    fn test_duplicate_tokens_deduplicated_in_first_occurrence_order() {
        let role = make_role(&[("python", 3)]);
        let result = analyze_gaps(
            &tokens(&["git", "python", "git", "python", "sql"]),
            &role,
            &catalog(),
        );
        assert_eq!(result.normalized_user_skills, vec!["git", "python", "sql"]);
    }

    #[test]
    fn test_unknown_user_tokens_never_crash_and_never_match() {
        let role = make_role(&[("python", 3), ("sql", 2)]);
        let result = analyze_gaps(
            &tokens(&["underwater-basket-weaving", "python"]),
            &role,
            &catalog(),
        );
        assert_eq!(result.matched_skills, vec!["python"]);
        assert_eq!(result.missing_skills, vec!["sql"]);
        assert!(result
            .normalized_user_skills
            .contains(&"underwater-basket-weaving".to_string()));
    }

    #[test]
    fn test_role_with_no_requirements_is_fully_ready() {
        let role = make_role(&[]);
        let result = analyze_gaps(&tokens(&["python"]), &role, &catalog());
        assert_eq!(result.readiness_percent, 100);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_readiness_rounds_to_nearest_percent() {
        let role = make_role(&[("python", 3), ("sql", 2), ("git", 1)]);
        // 1/3 → 33, 2/3 → 67
        let one = analyze_gaps(&tokens(&["python"]), &role, &catalog());
        assert_eq!(one.readiness_percent, 33);
        let two = analyze_gaps(&tokens(&["python", "sql"]), &role, &catalog());
        assert_eq!(two.readiness_percent, 67);
    }

    #[test]
    fn test_readiness_monotonically_non_decreasing() {
        let role = make_role(&[("html", 3), ("css", 3), ("javascript", 3), ("git", 2)]);
        let all = ["html", "css", "javascript", "git"];
        let mut previous = 0;
        for n in 0..=all.len() {
            let result = analyze_gaps(&tokens(&all[..n]), &role, &catalog());
            assert!(
                result.readiness_percent >= previous,
                "readiness dropped from {previous} to {} at {n} skills",
                result.readiness_percent
            );
            previous = result.readiness_percent;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_analyzer_is_idempotent() {
        let role = make_role(&[("python", 3), ("docker", 2), ("communication", 1)]);
        let user = tokens(&["python", "git", "python"]);
        let first = analyze_gaps(&user, &role, &catalog());
        let second = analyze_gaps(&user, &role, &catalog());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_grouped_by_catalog_category() {
        let role = make_role(&[("python", 3), ("react", 2), ("docker", 2), ("agile", 1)]);
        let result = analyze_gaps(&[], &role, &catalog());
        assert_eq!(result.missing_skills_by_category.language, vec!["python"]);
        assert_eq!(result.missing_skills_by_category.framework, vec!["react"]);
        assert_eq!(result.missing_skills_by_category.tool, vec!["docker"]);
        assert_eq!(result.missing_skills_by_category.soft, vec!["agile"]);
    }

    // Documented quirk: a required skill id with no catalog row is dropped
    // from the category view but still counts as missing and still sits in
    // the readiness denominator.
    #[test]
    fn test_uncataloged_requirement_counts_as_missing_but_skips_category_view() {
        let role = make_role(&[("python", 3), ("fortran", 2)]);
        let result = analyze_gaps(&tokens(&["python"]), &role, &catalog());

        assert_eq!(result.missing_skills, vec!["fortran"]);
        assert_eq!(result.readiness_percent, 50);

        let categorized = result.missing_skills_by_category.language.len()
            + result.missing_skills_by_category.framework.len()
            + result.missing_skills_by_category.tool.len()
            + result.missing_skills_by_category.soft.len();
        assert_eq!(categorized, 0);
    }

    #[test]
    fn test_match_order_follows_role_not_user_input() {
        let role = make_role(&[("html", 3), ("css", 3), ("javascript", 3)]);
        let result = analyze_gaps(&tokens(&["javascript", "html"]), &role, &catalog());
        assert_eq!(result.matched_skills, vec!["html", "javascript"]);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let role = make_role(&[("python", 3)]);
        let result = analyze_gaps(&[], &role, &catalog());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""roleId""#));
        assert!(json.contains(r#""readinessPercent""#));
        assert!(json.contains(r#""missingSkillsByCategory""#));
    }
}
