//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping               GET   健康检查
//! - /api/book/list          GET   列出正典书卷
//! - /api/version/list       GET   列出所有译本
//! - /api/version/import     POST  导入译本经文
//! - /api/passage/plan       POST  解析引文并返回检索计划
//! - /api/passage/read       POST  解析引文并读取经文

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/book", book_routes())
        .nest("/version", version_routes())
        .nest("/passage", passage_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new().route("/list", get(handlers::list_books))
}

/// Version 路由
fn version_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_versions))
        .route("/import", post(handlers::import_version))
}

/// Passage 路由
fn passage_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plan", post(handlers::plan_passage))
        .route("/read", post(handlers::read_passage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::domain::canon::BookResolver;
    use crate::infrastructure::memory::InMemoryVerseStore;

    fn app() -> Router {
        let store = InMemoryVerseStore::new().arc();
        let state = AppState::new(
            Arc::new(BookResolver::bundled().unwrap()),
            store.clone(),
            store,
            "kjv",
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn send(app: &Router, request: Request<Body>) -> Value {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn import_john(app: &Router, abbreviation: &str) {
        let verses: Vec<Value> = (1..=3)
            .flat_map(|c| (1..=5).map(move |v| (c, v)))
            .map(|(c, v)| {
                json!({
                    "book": "Jn",
                    "chapter": c,
                    "verse": v,
                    "text": format!("{} {}:{}", abbreviation, c, v),
                })
            })
            .collect();
        let body = send(
            app,
            post_json(
                "/api/version/import",
                json!({
                    "abbreviation": abbreviation,
                    "name": abbreviation.to_uppercase(),
                    "language": "en",
                    "verses": verses,
                }),
            ),
        )
        .await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["imported"], 15);
    }

    #[tokio::test]
    async fn test_ping() {
        let body = send(&app(), get_request("/api/ping")).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_book_list() {
        let body = send(&app(), get_request("/api/book/list")).await;
        let books = body["data"].as_array().unwrap();
        assert_eq!(books.len(), 73);
        assert_eq!(books[0]["name"], "Genesis");
        assert_eq!(books[0]["testament"], "old");
        assert!(books
            .iter()
            .any(|b| b["key"] == "tobit" && b["deuterocanonical"] == true));
    }

    #[tokio::test]
    async fn test_import_and_list_versions() {
        let app = app();
        import_john(&app, "KJV").await;

        let body = send(&app, get_request("/api/version/list")).await;
        let versions = body["data"].as_array().unwrap();
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0]["abbreviation"], "kjv");
        assert_eq!(versions[0]["verse_count"], 15);
    }

    #[tokio::test]
    async fn test_read_passage_default_version() {
        let app = app();
        import_john(&app, "kjv").await;

        let body = send(
            &app,
            post_json("/api/passage/read", json!({ "citation": "Jn 2,3-4" })),
        )
        .await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["reference"], "John 2:3-4");
        assert_eq!(body["data"]["mode"], "verse-list");
        let verses = body["data"]["verses"].as_array().unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0]["text"], "kjv 2:3");
        assert_eq!(verses[1]["reference"], "John 2:4");
    }

    #[tokio::test]
    async fn test_read_passage_compare() {
        let app = app();
        import_john(&app, "kjv").await;
        import_john(&app, "niv").await;

        let body = send(
            &app,
            post_json(
                "/api/passage/read",
                json!({ "citation": "John 1:1", "versions": ["niv", "kjv"] }),
            ),
        )
        .await;
        assert_eq!(body["data"]["mode"], "compare");
        let texts: Vec<&str> = body["data"]["verses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["niv 1:1", "kjv 1:1"]);
    }

    #[tokio::test]
    async fn test_plan_passage() {
        let app = app();
        import_john(&app, "kjv").await;

        let body = send(
            &app,
            post_json("/api/passage/plan", json!({ "citation": "Jn 1-2" })),
        )
        .await;
        assert_eq!(body["data"]["mode"], "chapter-concat");
        let steps = body["data"]["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1]["kind"], "chapter");
        assert_eq!(steps[1]["targets"][0], "John 2");
    }

    #[tokio::test]
    async fn test_invalid_citation_is_bad_request() {
        let app = app();
        import_john(&app, "kjv").await;

        let body = send(
            &app,
            post_json("/api/passage/read", json!({ "citation": "Xyz 1:1" })),
        )
        .await;
        assert_eq!(body["errno"], 400);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_version_is_not_found() {
        let body = send(
            &app(),
            post_json(
                "/api/passage/read",
                json!({ "citation": "Jn 1:1", "versions": ["esv"] }),
            ),
        )
        .await;
        assert_eq!(body["errno"], 404);
    }
}
