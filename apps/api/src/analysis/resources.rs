//! Learning-resource selection — curated roadmap paths with a web-search
//! fallback. Pure lookup over static tables; no network involved.

use serde::{Deserialize, Serialize};

use crate::catalog::SkillCatalog;
use crate::models::role::RoleDefinition;

/// Max skill-specific resources returned per request.
const SKILL_RESOURCE_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Roadmap,
    WebSearch,
}

/// A recommended external learning resource. Stateless presentation data
/// with no identity beyond the run that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Curated tables
// ────────────────────────────────────────────────────────────────────────────

/// Role id → roadmap.sh path.
const ROLE_ROADMAPS: &[(&str, &str)] = &[
    ("frontend-dev", "frontend"),
    ("backend-dev", "backend"),
    ("fullstack-dev", "full-stack"),
    ("junior-web-dev", "frontend"),
    ("data-analyst", "data-analyst"),
    ("devops-engineer", "devops"),
    ("python-dev", "python"),
    ("database-admin", "database"),
];

/// Keyword → roadmap.sh path, matched case-insensitively against skill
/// labels. Iteration order is part of the contract: first matching key wins.
const SKILL_ROADMAPS: &[(&str, &str)] = &[
    ("frontend", "frontend"),
    ("backend", "backend"),
    ("fullstack", "full-stack"),
    ("react", "react"),
    ("nodejs", "nodejs"),
    ("python", "python"),
    ("devops", "devops"),
    ("javascript", "javascript"),
    ("html", "frontend"),
    ("css", "frontend"),
    ("database", "database"),
    ("data-analyst", "data-analyst"),
];

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

fn role_roadmap_url(role: &RoleDefinition) -> Option<String> {
    ROLE_ROADMAPS
        .iter()
        .find(|(id, _)| *id == role.id)
        .map(|(_, path)| format!("https://roadmap.sh/{path}"))
}

/// Resolves a learning URL for a skill label: the role's curated path first,
/// then the keyword table, then a web search.
pub fn roadmap_url(skill_label: &str, role: Option<&RoleDefinition>) -> String {
    if let Some(url) = role.and_then(role_roadmap_url) {
        return url;
    }

    let normalized = skill_label.to_lowercase();
    for (key, path) in SKILL_ROADMAPS {
        if normalized.contains(key) {
            return format!("https://roadmap.sh/{path}");
        }
    }

    // Web-adjacent labels still get the general frontend path.
    if normalized.contains("web") {
        return "https://roadmap.sh/frontend".to_string();
    }

    web_search_url(skill_label)
}

fn web_search_url(skill_label: &str) -> String {
    let query = format!("{skill_label} learning resources tutorial");
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(&query)
    )
}

/// Builds the resource list for a missing-skill set: an optional curated
/// role roadmap first, then one resource per missing skill for the first
/// `SKILL_RESOURCE_LIMIT` (the caller passes them importance-ordered).
///
/// Never omits an entry: a skill id with no catalog row keeps its raw id as
/// the display label, and a label with no curated match degrades to a
/// web-search resource. Output is always `min(5, missing)` skill resources
/// plus at most one role roadmap.
pub fn recommended_resources(
    missing_skills: &[String],
    catalog: &SkillCatalog,
    role: Option<&RoleDefinition>,
) -> Vec<RecommendedResource> {
    let mut resources = Vec::new();

    if let Some(role) = role {
        if let Some(url) = role_roadmap_url(role) {
            resources.push(RecommendedResource {
                title: format!("{} Roadmap", role.name),
                url,
                resource_type: ResourceType::Roadmap,
                description: Some(format!("Complete learning path for {}", role.name)),
            });
        }
    }

    for skill_id in missing_skills.iter().take(SKILL_RESOURCE_LIMIT) {
        let label = catalog.display_label(skill_id);
        let url = roadmap_url(label, role);
        let (resource_type, description) = if url.contains("roadmap.sh") {
            (ResourceType::Roadmap, format!("Roadmap for {label}"))
        } else {
            (
                ResourceType::WebSearch,
                format!("Search for {label} learning resources"),
            )
        };
        resources.push(RecommendedResource {
            title: format!("Learn {label}"),
            url,
            resource_type,
            description: Some(description),
        });
    }

    resources
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
