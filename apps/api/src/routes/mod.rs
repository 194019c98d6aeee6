pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogs
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route(
            "/api/v1/skills/suggest",
            get(handlers::handle_suggest_skills),
        )
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/roles/:id", get(handlers::handle_get_role))
        .route(
            "/api/v1/roles/:id/statistics",
            get(handlers::handle_role_statistics),
        )
        // Analysis pipeline
        .route("/api/v1/analysis", post(handlers::handle_analysis))
        .route("/api/v1/analysis/projects", post(handlers::handle_projects))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::projects::FallbackProjectGenerator;
    use crate::catalog::{RoleCatalog, SkillCatalog};
    use crate::config::Config;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                anthropic_api_key: None,
                stats_api_url: None,
                port: 0,
                rust_log: "info".to_string(),
            },
            skills: Arc::new(SkillCatalog::load().unwrap()),
            roles: Arc::new(RoleCatalog::load().unwrap()),
            projects: Arc::new(FallbackProjectGenerator),
            http: reqwest::Client::new(),
        }
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_role_is_404_with_error_body() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/roles/astronaut")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_analysis_round_trip() {
        let app = build_router(test_state());
        let body = serde_json::json!({
            "roleId": "frontend-dev",
            "skills": ["html", "css"],
            "horizonMonths": 6
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analysis")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response.into_body()).await;
        assert_eq!(json["analysis"]["roleId"], "frontend-dev");
        assert_eq!(json["analysis"]["matchedSkills"], serde_json::json!(["html", "css"]));
        assert!(json["analysis"]["readinessPercent"].is_u64());
        assert!(!json["timeline"].as_array().unwrap().is_empty());
        assert!(!json["resources"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analysis_rejects_zero_horizon() {
        let app = build_router(test_state());
        let body = serde_json::json!({
            "roleId": "frontend-dev",
            "skills": [],
            "horizonMonths": 0
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analysis")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_projects_endpoint_uses_fallback_generator() {
        let app = build_router(test_state());
        let body = serde_json::json!({
            "roleId": "data-analyst",
            "skills": ["sql"]
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analysis/projects")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response.into_body()).await;
        let projects = json.as_array().unwrap();
        assert!(!projects.is_empty());
        assert!(projects.len() <= 5);
        assert_eq!(projects[0]["difficulty"], "beginner");
    }

    #[tokio::test]
    async fn test_suggest_endpoint_filters_and_excludes() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/skills/suggest?q=java&exclude=javascript")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        for skill in json.as_array().unwrap() {
            assert_ne!(skill["id"], "javascript");
        }
    }

    #[tokio::test]
    async fn test_statistics_endpoint_serves_fallback_data() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/roles/devops-engineer/statistics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["statistics"]["medianPay"], "$124,200 per year");
        assert_eq!(
            json["sourceUrl"],
            "https://www.bls.gov/ooh/computer-and-information-technology/software-developers.htm"
        );
    }
}
