use serde::{Deserialize, Serialize};

/// A single skill a role requires. `importance` is ordinal in {1, 2, 3},
/// 3 highest — it drives timeline sequencing, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSkillRequirement {
    pub skill_id: String,
    pub importance: u8,
}

/// An immutable role definition from the role catalog. Each `skill_id`
/// appears at most once in `required_skills`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub required_skills: Vec<RoleSkillRequirement>,
}

impl RoleDefinition {
    /// Importance the role declares for a skill, 0 when it does not require it.
    pub fn importance_of(&self, skill_id: &str) -> u8 {
        self.required_skills
            .iter()
            .find(|r| r.skill_id == skill_id)
            .map(|r| r.importance)
            .unwrap_or(0)
    }
}
