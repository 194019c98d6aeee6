//! Occupational statistics — optional remote lookup with a static fallback.
//!
//! Role ids resolve through a fixed role → occupation-term table. When a
//! statistics endpoint is configured the remote is tried once with a fixed
//! timeout; any failure falls back to static estimates kept in line with
//! published BLS figures. Callers never see an error.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::role::RoleDefinition;

/// Transport timeout for the optional statistics fetch. No retries.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatistics {
    pub median_pay: String,
    pub number_of_jobs: String,
    pub job_outlook: String,
    pub employment_change: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Role id → occupation search term (BLS occupational groups).
const ROLE_OCCUPATIONS: &[(&str, &str)] = &[
    ("junior-web-dev", "web developers"),
    ("frontend-dev", "web developers"),
    ("backend-dev", "software developers"),
    ("fullstack-dev", "software developers"),
    ("python-dev", "software developers"),
    ("data-analyst", "data analysts"),
    ("devops-engineer", "software developers"),
    ("database-admin", "database administrators"),
];

const DEFAULT_OCCUPATION: &str = "software developers";

pub fn occupation_term(role: &RoleDefinition) -> &'static str {
    ROLE_OCCUPATIONS
        .iter()
        .find(|(id, _)| *id == role.id)
        .map(|(_, term)| *term)
        .unwrap_or(DEFAULT_OCCUPATION)
}

/// Occupational-outlook source page for a role's occupation.
pub fn outlook_url(role: &RoleDefinition) -> String {
    let term = occupation_term(role).replace(' ', "-");
    format!("https://www.bls.gov/ooh/computer-and-information-technology/{term}.htm")
}

/// Fetches statistics for a role. When `stats_api_url` is configured the
/// remote endpoint is tried once; on any failure, or when unconfigured,
/// the static table answers instead.
pub async fn fetch_job_statistics(
    http: &Client,
    stats_api_url: Option<&str>,
    role: &RoleDefinition,
) -> JobStatistics {
    let term = occupation_term(role);

    if let Some(base) = stats_api_url {
        match fetch_remote(http, base, term).await {
            Ok(stats) => return stats,
            Err(e) => warn!("Statistics fetch for '{term}' failed, using fallback data: {e}"),
        }
    }

    fallback_job_statistics(term)
}

async fn fetch_remote(
    http: &Client,
    base: &str,
    term: &str,
) -> Result<JobStatistics, reqwest::Error> {
    let url = format!("{base}?occupation={}", urlencoding::encode(term));
    http.get(&url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .json::<JobStatistics>()
        .await
}

/// Static per-occupation estimates.
pub fn fallback_job_statistics(term: &str) -> JobStatistics {
    let (median_pay, number_of_jobs, job_outlook, employment_change) = match term {
        "web developers" => (
            "$78,300 per year",
            "197,900",
            "23% (Much faster than average)",
            "+45,400",
        ),
        "software developers" => (
            "$124,200 per year",
            "1,795,000",
            "25% (Much faster than average)",
            "+451,200",
        ),
        "data analysts" => (
            "$103,500 per year",
            "113,300",
            "35% (Much faster than average)",
            "+59,400",
        ),
        "database administrators" => (
            "$112,120 per year",
            "144,500",
            "8% (As fast as average)",
            "+11,800",
        ),
        _ => (
            "$100,000 per year",
            "500,000",
            "20% (Faster than average)",
            "+100,000",
        ),
    };

    JobStatistics {
        median_pay: median_pay.to_string(),
        number_of_jobs: number_of_jobs.to_string(),
        job_outlook: job_outlook.to_string(),
        employment_change: employment_change.to_string(),
        last_updated: Some(Utc::now()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
