//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                          GET   健康检查
//! - /api/novel/create                  POST  创建小说
//! - /api/novel/get                     POST  获取小说
//! - /api/novel/list                    GET   列出小说
//! - /api/novel/update                  POST  更新小说
//! - /api/novel/delete                  POST  删除小说（丢弃检查器，解除角色归属）
//! - /api/character/create              POST  创建角色
//! - /api/character/get                 POST  获取角色详情
//! - /api/character/list                GET   列出角色（?novel_id=）
//! - /api/character/update              POST  更新角色档案
//! - /api/character/delete              POST  删除角色
//! - /api/character/analyze             POST  关系分析（可指定目标）
//! - /api/character/relationship/update POST  更新关系评分
//! - /api/character/relationship/types  GET   关系类型注册表
//! - /api/narrative/structure/create    POST  创建（替换）故事结构
//! - /api/narrative/structure/get       POST  获取故事结构
//! - /api/narrative/structure/discard   POST  丢弃故事结构
//! - /api/narrative/plot/validate       POST  情节校验
//! - /api/narrative/plot/issues         POST  最近一次情节校验问题
//! - /api/narrative/consistency         POST  一致性分析
//! - /api/world/create                  POST  创建世界观
//! - /api/world/get                     POST  获取世界观
//! - /api/world/list                    GET   列出世界观
//! - /api/world/update                  POST  更新世界观
//! - /api/world/delete                  POST  删除世界观及其要素
//! - /api/world/element/create          POST  创建世界观要素
//! - /api/world/element/get             POST  获取要素
//! - /api/world/element/list            GET   列出要素（?world_id=&category=）
//! - /api/world/element/update          POST  更新要素
//! - /api/world/element/delete          POST  删除要素
//! - /api/world/validate                POST  一致性校验
//! - /api/world/validation              GET   最近一次校验报告

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
        .nest("/novel", novel_routes())
        .nest("/character", character_routes())
        .nest("/narrative", narrative_routes())
        .nest("/world", world_routes())
}

/// Novel 路由
fn novel_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_novel))
        .route("/get", post(handlers::get_novel))
        .route("/list", get(handlers::list_novels))
        .route("/update", post(handlers::update_novel))
        .route("/delete", post(handlers::delete_novel))
}

/// Character 路由
fn character_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_character))
        .route("/get", post(handlers::get_character))
        .route("/list", get(handlers::list_characters))
        .route("/update", post(handlers::update_character))
        .route("/delete", post(handlers::delete_character))
        .route("/analyze", post(handlers::analyze_relationships))
        .route("/relationship/update", post(handlers::update_relationship))
        .route(
            "/relationship/types",
            get(handlers::list_relationship_types),
        )
}

/// Narrative 路由
fn narrative_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/structure/create", post(handlers::create_structure))
        .route("/structure/get", post(handlers::get_structure))
        .route("/structure/discard", post(handlers::discard_structure))
        .route("/plot/validate", post(handlers::validate_plot))
        .route("/plot/issues", post(handlers::get_plot_issues))
        .route("/consistency", post(handlers::analyze_consistency))
}

/// World 路由
fn world_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_world))
        .route("/get", post(handlers::get_world))
        .route("/list", get(handlers::list_worlds))
        .route("/update", post(handlers::update_world))
        .route("/delete", post(handlers::delete_world))
        .nest("/element", world_element_routes())
        .route("/validate", post(handlers::validate_world))
        .route("/validation", get(handlers::get_last_validation))
}

/// World Element 路由
fn world_element_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_world_element))
        .route("/get", post(handlers::get_world_element))
        .route("/list", get(handlers::list_world_elements))
        .route("/update", post(handlers::update_world_element))
        .route("/delete", post(handlers::delete_world_element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;
    use uuid::Uuid;

    use crate::domain::PermissiveRules;
    use crate::infrastructure::memory::{
        InMemoryCharacterTracker, InMemoryNarrativeChecker, InMemoryNovelRepository,
        InMemoryWorldValidator,
    };

    fn test_router() -> Router {
        let rules = Arc::new(PermissiveRules);
        let state = AppState::new(
            Arc::new(InMemoryNovelRepository::new()),
            Arc::new(InMemoryCharacterTracker::new()),
            Arc::new(InMemoryNarrativeChecker::new(rules.clone())),
            Arc::new(InMemoryWorldValidator::new(rules.clone(), rules)),
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Value {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post_json(router: &Router, uri: &str, body: Value) -> Value {
        send(router, Method::POST, uri, Some(body)).await
    }

    async fn create_novel(router: &Router, title: &str) -> String {
        let novel = post_json(router, "/api/novel/create", json!({"title": title})).await;
        assert_eq!(novel["errno"], 0);
        novel["data"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_ping() {
        let router = test_router();
        let json = send(&router, Method::GET, "/api/ping", None).await;
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_character_relationship_flow() {
        let router = test_router();

        let a = post_json(&router, "/api/character/create", json!({"name": "Aria"})).await;
        let b = post_json(&router, "/api/character/create", json!({"name": "Bran"})).await;
        let a_id = a["data"]["id"].as_str().unwrap().to_string();
        let b_id = b["data"]["id"].as_str().unwrap().to_string();

        let rejected = post_json(
            &router,
            "/api/character/relationship/update",
            json!({"id": a_id, "target_id": b_id, "relationship_type": "friendship", "value": 1.2}),
        )
        .await;
        assert_eq!(rejected["errno"], 400);

        let unknown = post_json(
            &router,
            "/api/character/relationship/update",
            json!({"id": a_id, "target_id": b_id, "relationship_type": "nemesis", "value": 0.5}),
        )
        .await;
        assert_eq!(unknown["errno"], 400);

        for (from, to, value) in [(&a_id, &b_id, 0.8), (&b_id, &a_id, 0.4)] {
            let body = json!({
                "id": from,
                "target_id": to,
                "relationship_type": "friendship",
                "value": value
            });
            let ok = post_json(&router, "/api/character/relationship/update", body).await;
            assert_eq!(ok["errno"], 0);
        }

        let analysis = post_json(&router, "/api/character/analyze", json!({"id": a_id})).await;
        assert_eq!(analysis["errno"], 0);
        let friendship = analysis["data"]["relationships"][&b_id]["friendship"]
            .as_f64()
            .unwrap();
        assert!((friendship - 0.6).abs() < 1e-9);
        assert_eq!(analysis["data"]["relationships"][&b_id]["rivalry"], 0.0);

        let missing = post_json(
            &router,
            "/api/character/analyze",
            json!({"id": a_id, "target_id": Uuid::new_v4()}),
        )
        .await;
        assert_eq!(missing["errno"], 404);
    }

    #[tokio::test]
    async fn test_character_crud() {
        let router = test_router();

        let empty = post_json(&router, "/api/character/create", json!({"name": "   "})).await;
        assert_eq!(empty["errno"], 400);
        let too_old = post_json(
            &router,
            "/api/character/create",
            json!({"name": "Aria", "age": 1001}),
        )
        .await;
        assert_eq!(too_old["errno"], 400);

        let created = post_json(
            &router,
            "/api/character/create",
            json!({"name": "Aria", "age": 19, "skills": ["archery"]}),
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let updated = post_json(
            &router,
            "/api/character/update",
            json!({"id": id, "background": "Raised in the northern keep"}),
        )
        .await;
        assert_eq!(updated["data"]["background"], "Raised in the northern keep");
        assert_eq!(updated["data"]["age"], 19);

        let bad_age = post_json(
            &router,
            "/api/character/update",
            json!({"id": id, "age": 2000}),
        )
        .await;
        assert_eq!(bad_age["errno"], 400);

        let list = send(&router, Method::GET, "/api/character/list", None).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 1);

        let deleted = post_json(&router, "/api/character/delete", json!({"id": id})).await;
        assert_eq!(deleted["errno"], 0);
        let gone = post_json(&router, "/api/character/get", json!({"id": id})).await;
        assert_eq!(gone["errno"], 404);
    }

    #[tokio::test]
    async fn test_relationship_types_registry() {
        let router = test_router();
        let uri = "/api/character/relationship/types";
        let json = send(&router, Method::GET, uri, None).await;
        let types = json["data"].as_array().unwrap();
        assert_eq!(types.len(), 5);
        let rivalry = types.iter().find(|t| t["name"] == "rivalry").unwrap();
        assert_eq!(rivalry["min"], -1.0);
        assert_eq!(rivalry["max"], 1.0);
    }

    #[tokio::test]
    async fn test_narrative_flow() {
        let router = test_router();
        let unknown = post_json(
            &router,
            "/api/narrative/consistency",
            json!({"novel_id": Uuid::new_v4()}),
        )
        .await;
        assert_eq!(unknown["errno"], 404);

        let novel_id = create_novel(&router, "Ashfall").await;
        let before = post_json(
            &router,
            "/api/narrative/consistency",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(before["errno"], 409);
        let status = post_json(
            &router,
            "/api/narrative/plot/issues",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(status["data"]["state"], "uninitialized");

        let created = post_json(
            &router,
            "/api/narrative/structure/create",
            json!({
                "novel_id": novel_id,
                "plot_elements": [
                    {"id": "p1", "title": "Departure", "order": 1, "chapter_id": "c1"},
                    {"id": "p2", "title": "Ambush", "order": 2, "chapter_id": "c9"},
                    {"id": "p3", "title": "Return", "order": 4}
                ],
                "chapters": [{"id": "c1", "characters": ["Aria", "Ghost"]}],
                "characters": [{"name": "Aria"}],
                "timeline": [
                    {"id": "e1", "date": "2024-01-01"},
                    {"id": "e2", "date": "2024-01-05"},
                    {"id": "e3", "date": "2024-01-03"}
                ]
            }),
        )
        .await;
        assert_eq!(created["errno"], 0);

        let validation = post_json(
            &router,
            "/api/narrative/plot/validate",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(validation["data"]["valid"], false);
        assert_eq!(validation["data"]["issues"].as_array().unwrap().len(), 1);

        let issues = post_json(
            &router,
            "/api/narrative/plot/issues",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(issues["data"]["state"], "validated");

        let report = post_json(
            &router,
            "/api/narrative/consistency",
            json!({"novel_id": novel_id}),
        )
        .await;
        let data = &report["data"];
        assert_eq!(data["character_consistency"]["status"], false);
        assert_eq!(data["timeline_consistency"]["status"], false);
        assert_eq!(
            data["timeline_consistency"]["issues"][0]["previous_event"],
            "e2"
        );
        assert_eq!(data["world_building_consistency"]["status"], true);
        assert_eq!(data["plot_flow"]["gaps"].as_array().unwrap().len(), 1);

        let bad = post_json(
            &router,
            "/api/narrative/structure/create",
            json!({"novel_id": novel_id, "plot_elements": [{"id": "", "title": "x", "order": 1}]}),
        )
        .await;
        assert_eq!(bad["errno"], 400);

        let discarded = post_json(
            &router,
            "/api/narrative/structure/discard",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(discarded["errno"], 0);
        let again = post_json(
            &router,
            "/api/narrative/structure/discard",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(again["errno"], 404);
    }

    #[tokio::test]
    async fn test_world_flow() {
        let router = test_router();

        let none = send(&router, Method::GET, "/api/world/validation", None).await;
        assert_eq!(none["errno"], 0);
        assert!(none["data"].is_null());

        let created = post_json(
            &router,
            "/api/world/element/create",
            json!({
                "name": "Valdris",
                "category": "location",
                "attributes": {"population": 12000},
                "rules": ["walls never fall"]
            }),
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap().to_string();
        post_json(
            &router,
            "/api/world/element/create",
            json!({"name": "Order of Ash", "category": "faction"}),
        )
        .await;

        let locations = send(
            &router,
            Method::GET,
            "/api/world/element/list?category=location",
            None,
        )
        .await;
        assert_eq!(locations["data"].as_array().unwrap().len(), 1);

        let updated = post_json(
            &router,
            "/api/world/element/update",
            json!({"id": id, "description": "A walled city"}),
        )
        .await;
        assert_eq!(updated["data"]["description"], "A walled city");
        assert_eq!(updated["data"]["attributes"]["population"], 12000);

        let report = post_json(&router, "/api/world/validate", json!({})).await;
        assert_eq!(report["data"]["is_valid"], true);

        let missing = post_json(
            &router,
            "/api/world/validate",
            json!({"id": Uuid::new_v4()}),
        )
        .await;
        assert_eq!(missing["errno"], 404);

        let cached = send(&router, Method::GET, "/api/world/validation", None).await;
        assert_eq!(cached["data"]["is_valid"], true);
    }

    #[tokio::test]
    async fn test_novel_owns_characters_and_checker() {
        let router = test_router();
        let novel_id = create_novel(&router, "Ashfall").await;
        let other_id = create_novel(&router, "Other").await;

        let bad_status = post_json(
            &router,
            "/api/novel/create",
            json!({"title": "Ashfall", "status": "published"}),
        )
        .await;
        assert_eq!(bad_status["errno"], 400);

        let updated = post_json(
            &router,
            "/api/novel/update",
            json!({"id": novel_id, "status": "in_progress", "tags": ["fantasy"]}),
        )
        .await;
        assert_eq!(updated["data"]["status"], "in_progress");
        assert_eq!(updated["data"]["language"], "ja");

        for (name, owner) in [("Aria", &novel_id), ("Bran", &other_id)] {
            let created = post_json(
                &router,
                "/api/character/create",
                json!({"name": name, "novel_id": owner}),
            )
            .await;
            assert_eq!(created["data"]["novel_id"], json!(owner));
        }
        let orphan = post_json(
            &router,
            "/api/character/create",
            json!({"name": "Cato", "novel_id": Uuid::new_v4()}),
        )
        .await;
        assert_eq!(orphan["errno"], 404);

        let uri = format!("/api/character/list?novel_id={}", novel_id);
        let scoped = send(&router, Method::GET, &uri, None).await;
        let scoped = scoped["data"].as_array().unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0]["name"], "Aria");

        let structure = post_json(
            &router,
            "/api/narrative/structure/create",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(structure["errno"], 0);

        let deleted = post_json(&router, "/api/novel/delete", json!({"id": novel_id})).await;
        assert_eq!(deleted["errno"], 0);
        let gone = post_json(
            &router,
            "/api/narrative/structure/get",
            json!({"novel_id": novel_id}),
        )
        .await;
        assert_eq!(gone["errno"], 404);
        let list = send(&router, Method::GET, "/api/novel/list", None).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 1);
        let all = send(&router, Method::GET, "/api/character/list", None).await;
        assert_eq!(all["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_world_container_flow() {
        let router = test_router();

        let invalid = post_json(
            &router,
            "/api/world/create",
            json!({"title": "Eternal", "description": " "}),
        )
        .await;
        assert_eq!(invalid["errno"], 400);

        let world = post_json(
            &router,
            "/api/world/create",
            json!({
                "title": "Eternal",
                "description": "Floating cities",
                "magic_system": "ether"
            }),
        )
        .await;
        let world_id = world["data"]["id"].as_str().unwrap().to_string();

        let element = post_json(
            &router,
            "/api/world/element/create",
            json!({"name": "Valdris", "world_id": world_id}),
        )
        .await;
        assert_eq!(element["data"]["world_id"], json!(world_id));
        post_json(
            &router,
            "/api/world/element/create",
            json!({"name": "Loose"}),
        )
        .await;
        let orphan = post_json(
            &router,
            "/api/world/element/create",
            json!({"name": "Rift", "world_id": Uuid::new_v4()}),
        )
        .await;
        assert_eq!(orphan["errno"], 404);

        let uri = format!("/api/world/element/list?world_id={}", world_id);
        let owned = send(&router, Method::GET, &uri, None).await;
        assert_eq!(owned["data"].as_array().unwrap().len(), 1);

        let updated = post_json(
            &router,
            "/api/world/update",
            json!({"id": world_id, "geography": "sky"}),
        )
        .await;
        assert_eq!(updated["data"]["geography"], "sky");
        assert_eq!(updated["data"]["magic_system"], "ether");

        let deleted = post_json(&router, "/api/world/delete", json!({"id": world_id})).await;
        assert_eq!(deleted["errno"], 0);
        let gone = send(&router, Method::GET, &uri, None).await;
        assert_eq!(gone["errno"], 404);
        let remaining = send(&router, Method::GET, "/api/world/element/list", None).await;
        assert_eq!(remaining["data"].as_array().unwrap().len(), 1);
    }
}
