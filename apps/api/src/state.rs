use std::sync::Arc;

use crate::analysis::projects::ProjectGenerator;
use crate::catalog::{RoleCatalog, SkillCatalog};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable skill catalog, loaded once at startup.
    pub skills: Arc<SkillCatalog>,
    /// Immutable role catalog, loaded once at startup.
    pub roles: Arc<RoleCatalog>,
    /// Pluggable project generator. LLM-backed when ANTHROPIC_API_KEY is
    /// set, deterministic local fallback otherwise.
    pub projects: Arc<dyn ProjectGenerator>,
    /// HTTP client for the optional statistics fetch.
    pub http: reqwest::Client,
}
