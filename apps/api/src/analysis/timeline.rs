//! Timeline generation — buckets missing skills into a month-by-month plan.
//!
//! Higher-importance skills come first; the plan always ends with an
//! "Apply for Jobs" milestone in the final month.

use serde::{Deserialize, Serialize};

use crate::analysis::gap::GapAnalysisResult;
use crate::catalog::SkillCatalog;
use crate::models::role::RoleDefinition;

/// Planning horizon used when a request does not specify one.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// One learning milestone. Ordering by month (then insertion order within a
/// month) matters for display; `id` has no identity beyond the run that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub skill_id: String,
    pub skill_name: String,
    pub month: u32,
    pub description: String,
    pub completed: bool,
}

/// Generates a learning timeline from an analysis result.
///
/// With nothing missing, the plan collapses to two fixed milestones
/// (months 1 and 2) regardless of the horizon. Otherwise missing skills are
/// stable-sorted by descending role importance and assigned to months 1..
/// in chunks of `per_month`, capped so the plan spans at least 2 and at
/// most `missing + 1` months.
pub fn generate_timeline(
    analysis: &GapAnalysisResult,
    catalog: &SkillCatalog,
    role: &RoleDefinition,
    horizon_months: u32,
) -> Vec<TimelineEvent> {
    let missing = &analysis.missing_skills;

    if missing.is_empty() {
        return vec![
            TimelineEvent {
                id: "ready".to_string(),
                skill_id: "ready".to_string(),
                skill_name: "You're Ready!".to_string(),
                month: 1,
                description: "You have all the required skills. Start applying for jobs \
                              and preparing for interviews."
                    .to_string(),
                completed: false,
            },
            apply_milestone(2),
        ];
    }

    // Stable sort keeps the analyzer's relative order among equal importance;
    // skills the role does not declare sort last (importance 0).
    let mut sorted: Vec<&String> = missing.iter().collect();
    sorted.sort_by_key(|id| std::cmp::Reverse(role.importance_of(id)));

    let skill_count = sorted.len() as u32;
    let effective_months = horizon_months.min(skill_count + 1).max(2);
    let per_month = skill_count.div_ceil(effective_months - 1).max(1) as usize;

    let mut events = Vec::new();
    let mut month = 1u32;
    let mut index = 0usize;

    while index < sorted.len() && month < effective_months {
        let chunk_end = (index + per_month).min(sorted.len());
        for skill_id in &sorted[index..chunk_end] {
            // An id with no catalog row emits nothing but still consumes
            // its slot in the month's chunk.
            if let Some(skill) = catalog.get(skill_id) {
                events.push(TimelineEvent {
                    id: format!("{}-{month}", skill.id),
                    skill_id: skill.id.clone(),
                    skill_name: skill.label.clone(),
                    month,
                    description: format!(
                        "Learn {} fundamentals and practice with projects",
                        skill.label
                    ),
                    completed: false,
                });
            }
        }
        index = chunk_end;
        month += 1;
    }

    events.push(apply_milestone(effective_months));
    events
}

fn apply_milestone(month: u32) -> TimelineEvent {
    TimelineEvent {
        id: "apply-jobs".to_string(),
        skill_id: "jobs".to_string(),
        skill_name: "Apply for Jobs".to_string(),
        month,
        description: "Start applying for positions and prepare for interviews".to_string(),
        completed: false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
