use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::gap::{analyze_gaps, GapAnalysisResult};
use crate::analysis::projects::ProjectSuggestion;
use crate::analysis::resources::{recommended_resources, RecommendedResource};
use crate::analysis::timeline::{generate_timeline, TimelineEvent, DEFAULT_HORIZON_MONTHS};
use crate::errors::AppError;
use crate::models::role::RoleDefinition;
use crate::models::skill::Skill;
use crate::state::AppState;
use crate::stats::{fetch_job_statistics, outlook_url, JobStatistics};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub role_id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub horizon_months: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: GapAnalysisResult,
    pub timeline: Vec<TimelineEvent>,
    pub resources: Vec<RecommendedResource>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStatisticsResponse {
    pub statistics: JobStatistics,
    /// Occupational-outlook page the figures are modeled on.
    pub source_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub q: String,
    /// Comma-separated skill ids to leave out of the suggestions.
    pub exclude: Option<String>,
}

fn resolve_role<'a>(state: &'a AppState, role_id: &str) -> Result<&'a RoleDefinition, AppError> {
    state
        .roles
        .get(role_id)
        .ok_or_else(|| AppError::NotFound(format!("Role '{role_id}' not found")))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    Json(state.skills.iter().cloned().collect())
}

/// GET /api/v1/skills/suggest?q=...&exclude=a,b
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> Json<Vec<Skill>> {
    let exclude: Vec<String> = params
        .exclude
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    let suggestions = state.skills.suggest(&params.q, &exclude);
    Json(suggestions.into_iter().cloned().collect())
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleDefinition>> {
    Json(state.roles.iter().cloned().collect())
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<Json<RoleDefinition>, AppError> {
    let role = resolve_role(&state, &role_id)?;
    Ok(Json(role.clone()))
}

/// GET /api/v1/roles/:id/statistics
pub async fn handle_role_statistics(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<Json<RoleStatisticsResponse>, AppError> {
    let role = resolve_role(&state, &role_id)?;
    let statistics =
        fetch_job_statistics(&state.http, state.config.stats_api_url.as_deref(), role).await;
    Ok(Json(RoleStatisticsResponse {
        statistics,
        source_url: outlook_url(role),
    }))
}

/// POST /api/v1/analysis
///
/// Runs the pure pipeline in one round trip: gap analysis, timeline, and
/// resource recommendations.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let role = resolve_role(&state, &req.role_id)?;
    let horizon = match req.horizon_months {
        Some(0) => {
            return Err(AppError::Validation(
                "horizonMonths must be a positive integer".to_string(),
            ))
        }
        Some(months) => months,
        None => DEFAULT_HORIZON_MONTHS,
    };

    let analysis = analyze_gaps(&req.skills, role, &state.skills);
    info!(
        "Analyzed {} skills against role {}: {}% ready, {} missing",
        analysis.normalized_user_skills.len(),
        role.id,
        analysis.readiness_percent,
        analysis.missing_skills.len()
    );

    let timeline = generate_timeline(&analysis, &state.skills, role, horizon);
    let resources = recommended_resources(&analysis.missing_skills, &state.skills, Some(role));

    Ok(Json(AnalysisResponse {
        analysis,
        timeline,
        resources,
    }))
}

/// POST /api/v1/analysis/projects
///
/// Re-runs the gap analysis and hands it to the configured project
/// generator. Never fails past role resolution — degraded generator paths
/// fall back locally.
pub async fn handle_projects(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<Vec<ProjectSuggestion>>, AppError> {
    let role = resolve_role(&state, &req.role_id)?;
    let analysis = analyze_gaps(&req.skills, role, &state.skills);
    let suggestions = state
        .projects
        .generate(&analysis, &state.skills, role, &req.skills)
        .await;
    Ok(Json(suggestions))
}
