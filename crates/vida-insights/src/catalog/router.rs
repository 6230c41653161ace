use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ArticleId, Catalog, CatalogError, Complexity};
use super::hubs::{
    hub_view, related_articles, ArticleDetailView, ArticleSummaryView, HubKind, ReadTimeFilter,
};
use super::roadmap::Roadmap;
use crate::recommendations::RecommendationEngine;

const DEFAULT_RELATED_LIMIT: usize = 3;

#[derive(Clone)]
struct CatalogRoutes {
    catalog: Arc<Catalog>,
    engine: Arc<RecommendationEngine>,
}

/// Read-only browsing endpoints: articles, topic and series listings, hubs and
/// the learning roadmap.
pub fn catalog_router(catalog: Arc<Catalog>, engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/articles", get(list_handler))
        .route("/api/v1/articles/:article_id", get(article_handler))
        .route("/api/v1/articles/:article_id/related", get(related_handler))
        .route("/api/v1/topics", get(topics_handler))
        .route("/api/v1/series", get(series_handler))
        .route("/api/v1/hubs/:kind/:value", get(hub_handler))
        .route("/api/v1/roadmap", get(roadmap_handler))
        .with_state(CatalogRoutes { catalog, engine })
}

#[derive(Debug, Default, Deserialize)]
struct ArticleQuery {
    complexity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RelatedQuery {
    limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct HubQuery {
    read_time: Option<String>,
}

async fn list_handler(State(routes): State<CatalogRoutes>) -> Json<Vec<ArticleSummaryView>> {
    Json(
        routes
            .catalog
            .articles()
            .iter()
            .map(ArticleSummaryView::from)
            .collect(),
    )
}

async fn article_handler(
    State(routes): State<CatalogRoutes>,
    Path(article_id): Path<String>,
    Query(query): Query<ArticleQuery>,
) -> Response {
    let complexity = match query.complexity.as_deref().map(str::parse::<Complexity>) {
        Some(Ok(complexity)) => complexity,
        Some(Err(err)) => return bad_request(err),
        None => Complexity::default(),
    };

    let id = ArticleId(article_id);
    match routes.catalog.get(&id) {
        Some(article) => {
            let view = ArticleDetailView::new(article, complexity);
            (StatusCode::OK, Json(view)).into_response()
        }
        None => not_found(CatalogError::ArticleNotFound(id)),
    }
}

async fn topics_handler(State(routes): State<CatalogRoutes>) -> Response {
    Json(routes.catalog.topics()).into_response()
}

async fn series_handler(State(routes): State<CatalogRoutes>) -> Response {
    Json(routes.catalog.series()).into_response()
}

async fn related_handler(
    State(routes): State<CatalogRoutes>,
    Path(article_id): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> Response {
    let id = ArticleId(article_id);
    let limit = query.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    match related_articles(&routes.catalog, &id, limit) {
        Ok(articles) => {
            let views: Vec<ArticleSummaryView> =
                articles.into_iter().map(ArticleSummaryView::from).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => not_found(err),
    }
}

async fn hub_handler(
    State(routes): State<CatalogRoutes>,
    Path((kind, value)): Path<(String, String)>,
    Query(query): Query<HubQuery>,
) -> Response {
    let kind = match HubKind::from_parts(&kind, &value) {
        Ok(kind) => kind,
        Err(err) => return bad_request(err),
    };
    let read_time = match query.read_time.as_deref().map(str::parse::<ReadTimeFilter>) {
        Some(Ok(filter)) => Some(filter),
        Some(Err(err)) => return bad_request(err),
        None => None,
    };

    let view = hub_view(&routes.catalog, &routes.engine, &kind, read_time);
    (StatusCode::OK, Json(view)).into_response()
}

async fn roadmap_handler(State(routes): State<CatalogRoutes>) -> Response {
    (StatusCode::OK, Json(Roadmap::resolve(&routes.catalog))).into_response()
}

fn bad_request(err: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn not_found(err: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}
