//! Static catalog loader — skills and roles embedded at compile time.
//!
//! Both catalogs are parsed once at startup and shared read-only behind
//! `Arc` in `AppState`. Nothing in the analysis pipeline mutates them.

use std::collections::HashMap;

use anyhow::{ensure, Context, Result};

use crate::models::role::RoleDefinition;
use crate::models::skill::Skill;

const SKILLS_JSON: &str = include_str!("../data/skills.json");
const ROLES_JSON: &str = include_str!("../data/roles.json");

/// Max results returned by the input-suggestion search.
const SUGGESTION_LIMIT: usize = 8;

/// The immutable set of known skills, indexed by id.
pub struct SkillCatalog {
    skills: Vec<Skill>,
    by_id: HashMap<String, usize>,
}

impl SkillCatalog {
    pub fn load() -> Result<Self> {
        Self::from_json(SKILLS_JSON)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let skills: Vec<Skill> =
            serde_json::from_str(raw).context("failed to parse skill catalog")?;
        let mut by_id = HashMap::with_capacity(skills.len());
        for (idx, skill) in skills.iter().enumerate() {
            ensure!(
                by_id.insert(skill.id.clone(), idx).is_none(),
                "duplicate skill id '{}' in catalog",
                skill.id
            );
        }
        Ok(Self { skills, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.by_id.get(id).map(|&idx| &self.skills[idx])
    }

    /// Display label for a skill id. Unknown ids fall back to the raw id so
    /// downstream views never lose an entry over a missing catalog row.
    pub fn display_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|s| s.label.as_str()).unwrap_or(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Input-suggestion search: case-insensitive substring match against
    /// labels and aliases, skipping already-selected ids, capped at
    /// `SUGGESTION_LIMIT` results in catalog order.
    pub fn suggest(&self, query: &str, exclude: &[String]) -> Vec<&Skill> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.skills
            .iter()
            .filter(|skill| {
                let label_hit = skill.label.to_lowercase().contains(&needle);
                let alias_hit = skill
                    .aliases
                    .iter()
                    .any(|a| a.to_lowercase().contains(&needle));
                let not_selected = !exclude.iter().any(|e| e == &skill.id);
                (label_hit || alias_hit) && not_selected
            })
            .take(SUGGESTION_LIMIT)
            .collect()
    }
}

/// The immutable set of role definitions, indexed by id.
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
    by_id: HashMap<String, usize>,
}

impl RoleCatalog {
    pub fn load() -> Result<Self> {
        Self::from_json(ROLES_JSON)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let roles: Vec<RoleDefinition> =
            serde_json::from_str(raw).context("failed to parse role catalog")?;
        let mut by_id = HashMap::with_capacity(roles.len());
        for (idx, role) in roles.iter().enumerate() {
            ensure!(
                by_id.insert(role.id.clone(), idx).is_none(),
                "duplicate role id '{}' in catalog",
                role.id
            );
        }
        Ok(Self { roles, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&RoleDefinition> {
        self.by_id.get(id).map(|&idx| &self.roles[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
