//! Project suggestions — pluggable, trait-based generator with an LLM
//! backend and a deterministic local fallback.
//!
//! `AppState` holds an `Arc<dyn ProjectGenerator>`, selected at startup:
//! LLM-backed when an API key is configured, local fallback otherwise.
//! Either way callers always get suggestions — the LLM path degrades to
//! the fallback on any failure instead of surfacing an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::gap::GapAnalysisResult;
use crate::analysis::prompts::{PROJECTS_PROMPT_TEMPLATE, PROJECTS_SYSTEM};
use crate::catalog::SkillCatalog;
use crate::llm_client::LlmClient;
use crate::models::role::RoleDefinition;

/// Upper bound on suggestions returned by any generator backend.
const SUGGESTION_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Intermediate
}

/// A suggested portfolio project. `skills` holds skill ids from the
/// missing-skill set the project is meant to exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The project-suggestion seam. Implementations must preserve the result
/// shape and the upper bound of `SUGGESTION_LIMIT` suggestions, and must
/// never fail — degraded paths fall back to
/// `fallback_project_suggestions` instead of returning an error.
#[async_trait]
pub trait ProjectGenerator: Send + Sync {
    async fn generate(
        &self,
        analysis: &GapAnalysisResult,
        catalog: &SkillCatalog,
        role: &RoleDefinition,
        user_skills: &[String],
    ) -> Vec<ProjectSuggestion>;
}

/// Deterministic generator used when no completion service is configured.
pub struct FallbackProjectGenerator;

#[async_trait]
impl ProjectGenerator for FallbackProjectGenerator {
    async fn generate(
        &self,
        analysis: &GapAnalysisResult,
        catalog: &SkillCatalog,
        role: &RoleDefinition,
        _user_skills: &[String],
    ) -> Vec<ProjectSuggestion> {
        fallback_project_suggestions(analysis, catalog, role)
    }
}

/// LLM-backed generator. Single attempt, no retries; any failure logs a
/// warning and returns the local fallback.
pub struct LlmProjectGenerator(pub LlmClient);

#[async_trait]
impl ProjectGenerator for LlmProjectGenerator {
    async fn generate(
        &self,
        analysis: &GapAnalysisResult,
        catalog: &SkillCatalog,
        role: &RoleDefinition,
        user_skills: &[String],
    ) -> Vec<ProjectSuggestion> {
        let prompt = build_projects_prompt(analysis, catalog, role, user_skills);
        match self
            .0
            .call_json::<Vec<ProjectSuggestion>>(&prompt, PROJECTS_SYSTEM)
            .await
        {
            Ok(mut suggestions) => {
                suggestions.truncate(SUGGESTION_LIMIT);
                info!(
                    "LLM generated {} project suggestions for role {}",
                    suggestions.len(),
                    role.id
                );
                suggestions
            }
            Err(e) => {
                warn!("Project generation LLM call failed, using local fallback: {e}");
                fallback_project_suggestions(analysis, catalog, role)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt assembly
// ────────────────────────────────────────────────────────────────────────────

fn build_projects_prompt(
    analysis: &GapAnalysisResult,
    catalog: &SkillCatalog,
    role: &RoleDefinition,
    user_skills: &[String],
) -> String {
    let missing = labels_joined(&analysis.missing_skills, catalog);
    let current = labels_joined(user_skills, catalog);
    let current = if current.is_empty() {
        "none".to_string()
    } else {
        current
    };

    PROJECTS_PROMPT_TEMPLATE
        .replace("{role_name}", &role.name)
        .replace("{user_skills}", &current)
        .replace("{missing_skills}", &missing)
        .replace("{role_description}", &role.description)
}

fn labels_joined(ids: &[String], catalog: &SkillCatalog) -> String {
    ids.iter()
        .map(|id| catalog.display_label(id))
        .collect::<Vec<_>>()
        .join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Local fallback
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic project suggestions: one per missing skill (first 5, in
/// analyzer order) with difficulty escalating by position, plus a combined
/// portfolio project when more than 2 skills are missing. The final list is
/// truncated to `SUGGESTION_LIMIT`.
pub fn fallback_project_suggestions(
    analysis: &GapAnalysisResult,
    catalog: &SkillCatalog,
    role: &RoleDefinition,
) -> Vec<ProjectSuggestion> {
    let missing: Vec<&String> = analysis
        .missing_skills
        .iter()
        .take(SUGGESTION_LIMIT)
        .collect();
    let mut projects = Vec::new();

    for (index, skill_id) in missing.iter().enumerate() {
        let label = catalog.display_label(skill_id);
        let difficulty = match index {
            0 | 1 => Difficulty::Beginner,
            2 | 3 => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        };
        projects.push(ProjectSuggestion {
            name: format!("Build a {label} Project"),
            description: format!(
                "Create a practical project using {label} to reinforce your learning and \
                 build your portfolio. This project will help you apply {label} concepts \
                 in a real-world scenario."
            ),
            skills: vec![(*skill_id).clone()],
            difficulty,
        });
    }

    if missing.len() > 2 {
        projects.push(ProjectSuggestion {
            name: format!("Full-Stack {} Portfolio Project", role.name),
            description: format!(
                "Build a complete application that showcases your skills as a {}. This \
                 project combines multiple technologies and demonstrates your ability to \
                 work on end-to-end solutions.",
                role.name
            ),
            skills: missing.iter().map(|id| (*id).clone()).collect(),
            difficulty: Difficulty::Intermediate,
        });
    }

    projects.truncate(SUGGESTION_LIMIT);
    projects
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
