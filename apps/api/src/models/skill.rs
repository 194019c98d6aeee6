use serde::{Deserialize, Serialize};

/// Category buckets used by the gap analyzer's per-category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
    Soft,
}

/// A known skill. `id` is the canonical identity used everywhere else in the
/// system; `aliases` exist only for the input-suggestion search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub label: String,
    pub aliases: Vec<String>,
    pub category: SkillCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&SkillCategory::Framework).unwrap();
        assert_eq!(json, r#""framework""#);
    }

    #[test]
    fn test_skill_deserializes_from_catalog_shape() {
        let json = r#"{
            "id": "react",
            "label": "React",
            "aliases": ["reactjs", "react.js"],
            "category": "framework"
        }"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.id, "react");
        assert_eq!(skill.category, SkillCategory::Framework);
        assert_eq!(skill.aliases.len(), 2);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{"id": "x", "label": "X", "aliases": [], "category": "hardware"}"#;
        assert!(serde_json::from_str::<Skill>(json).is_err());
    }
}
