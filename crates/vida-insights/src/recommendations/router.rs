use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::{Recommendation, RecommendationEngine, Trace, VisitorProfile};
use crate::catalog::domain::Catalog;

#[derive(Clone)]
struct RecommendationRoutes {
    catalog: Arc<Catalog>,
    engine: Arc<RecommendationEngine>,
}

/// Request body: the visitor profile plus an opt-in for the diagnostic trace.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub profile: VisitorProfile,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationPayload {
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,
}

pub fn recommendation_router(catalog: Arc<Catalog>, engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(RecommendationRoutes { catalog, engine })
}

async fn recommend_handler(
    State(routes): State<RecommendationRoutes>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationPayload> {
    let response = routes.engine.recommend(&request.profile, &routes.catalog);

    tracing::info!(
        role = %request.profile.role,
        saved_topics = request.profile.saved_topics.len(),
        results = response.recommendations.len(),
        "recommendations served"
    );

    Json(RecommendationPayload {
        recommendations: response.recommendations,
        trace: request.debug.then_some(response.trace),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(body: Value) -> (StatusCode, Value) {
        let router = recommendation_router(
            Arc::new(Catalog::standard()),
            Arc::new(RecommendationEngine::default()),
        );
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn business_visitor_gets_ranked_recommendations() {
        let (status, body) = post_json(json!({
            "role": "business",
            "saved_topics": ["Ransomware"],
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        let recommendations = body["recommendations"].as_array().expect("array");
        assert_eq!(recommendations[0]["article_id"], "2");
        assert_eq!(recommendations[0]["reason"], "Perfect for businesss");
        assert_eq!(recommendations[0]["score"], 80.0);
        assert!(body.get("trace").is_none());
    }

    #[tokio::test]
    async fn debug_flag_includes_trace() {
        let (status, body) = post_json(json!({
            "role": "student",
            "completed_article_ids": ["1"],
            "debug": true,
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["trace"]["filtered_ids"], json!(["1"]));
        assert!(body["recommendations"]
            .as_array()
            .expect("array")
            .iter()
            .all(|rec| rec["article_id"] != "1"));
    }
}
