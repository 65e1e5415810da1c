// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{
    build_router, default_fingerprint, seed_api_key, seed_validated_url, site_settings, spawn_app,
    CountingProvider, CountingStore,
};
use ampscan::domain::models::validation_record::EnvironmentFingerprint;
use ampscan::domain::repositories::paired_routing::{CanonicalRouter, QueryVarRouter};
use ampscan::domain::repositories::site_state_repository::SiteStateRepository;
use ampscan::domain::repositories::url_provider::UrlEntry;
use ampscan::domain::repositories::validation_store::RepositoryError;
use ampscan::domain::services::correlation_service::CorrelationService;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_items(router: Router, key: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .uri("/v1/scannable-urls")
                .header("Authorization", format!("Bearer {}", key))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_never_validated_canonical_site_scenario() {
    // 单个候选 URL、无历史记录、AMP 规范站点（amp_url 与 url 相同）
    let app = spawn_app(site_settings(vec![]), Arc::new(CanonicalRouter)).await;

    let (status, body) = get_items(app.router, &app.validate_key).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["url"], "https://x/");
    assert_eq!(item["amp_url"], "https://x/");
    assert_eq!(item["type"], "home");
    assert_eq!(item["label"], "Homepage");
    assert!(item["validated_url_post"].is_null());
    assert!(item["validation_errors"].is_null());
    assert!(item["stale"].is_null());
}

#[tokio::test]
async fn test_paired_site_amp_url_carries_query_var() {
    // 配对路由站点，AMP URL 由查询参数派生
    let app = spawn_app(site_settings(vec![]), Arc::new(QueryVarRouter::new("amp"))).await;

    let (_, body) = get_items(app.router, &app.validate_key).await;

    assert_eq!(body[0]["amp_url"], "https://x/?amp=1");
}

#[tokio::test]
async fn test_validated_url_with_fresh_record() {
    // 记录带两条错误且环境指纹未变，结果应为非陈旧
    let app = spawn_app(site_settings(vec![]), Arc::new(CanonicalRouter)).await;
    let record_id = seed_validated_url(
        &app.db,
        "https://x/",
        r#"[{"data":{"code":"DISALLOWED_TAG"}},{"data":{"code":"INVALID_ATTR"}}]"#,
        Utc::now().into(),
        None,
    )
    .await;

    let (_, body) = get_items(app.router, &app.validate_key).await;
    let item = &body[0];

    assert_eq!(item["validation_errors"].as_array().unwrap().len(), 2);
    assert_eq!(item["stale"], false);
    assert_eq!(item["validated_url_post"]["id"], record_id);
    assert_eq!(item["validated_url_post"]["edit_link"], "https://x/wp-admin/");
}

#[tokio::test]
async fn test_content_edit_after_capture_flags_stale() {
    // 捕获之后内容被编辑，结果应标记为陈旧
    let app = spawn_app(site_settings(vec![]), Arc::new(CanonicalRouter)).await;
    let captured: DateTime<FixedOffset> = Utc::now().into();
    seed_validated_url(
        &app.db,
        "https://x/",
        r#"[{"data":{"code":"DISALLOWED_TAG"}}]"#,
        captured,
        Some(captured + Duration::minutes(30)),
    )
    .await;

    let (_, body) = get_items(app.router, &app.validate_key).await;
    let item = &body[0];

    assert_eq!(item["stale"], true);
    // 错误仍反映上次验证
    assert_eq!(item["validation_errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unauthorized_caller_gets_error_envelope_only() {
    // 缺少 API key 的调用者只得到错误信封，不泄露任何条目
    let app = spawn_app(site_settings(vec![]), Arc::new(CanonicalRouter)).await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/v1/scannable-urls")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["code"], "amp_rest_cannot_validate_urls");
    assert!(body.get("message").is_some());
    // 没有结果数组
    assert!(body.as_object().unwrap().get("items").is_none());
    assert!(!body.is_array());
}

#[tokio::test]
async fn test_unauthorized_caller_never_reaches_provider_or_store() {
    let db = Arc::new(Database::connect("sqlite::memory:").await.unwrap());
    Migrator::up(db.as_ref(), None).await.unwrap();
    let _key = seed_api_key(&db, true).await;

    struct FixedSiteState;

    #[async_trait]
    impl SiteStateRepository for FixedSiteState {
        async fn current_fingerprint(&self) -> Result<EnvironmentFingerprint, RepositoryError> {
            Ok(crate::helpers::default_fingerprint())
        }
    }

    let provider = Arc::new(CountingProvider::new(vec![UrlEntry {
        url: Some("https://x/".to_string()),
        page_type: "home".to_string(),
        label: "Homepage".to_string(),
    }]));
    let store = Arc::new(CountingStore::new(vec![]));

    let service = Arc::new(CorrelationService::new(
        provider.clone(),
        Arc::new(CanonicalRouter),
        store.clone(),
        Arc::new(FixedSiteState),
    ));

    let router = build_router(service, db);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/v1/scannable-urls")
                .header("Authorization", "Bearer unknown-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // 门禁短路：管道完全没有运行
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_key_without_capability_is_rejected_before_the_pipeline() {
    let app = spawn_app(site_settings(vec![]), Arc::new(CanonicalRouter)).await;

    let (status, body) = get_items(app.router, &app.plain_key).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "amp_rest_cannot_validate_urls");
    assert_eq!(body["data"]["status"], 403);
}

#[tokio::test]
async fn test_items_follow_provider_order_and_missing_records_are_kept() {
    let app = spawn_app(
        site_settings(vec![
            ("https://x/?s=", "search", "Search results"),
            ("https://x/sample-post/", "singular", "Post"),
        ]),
        Arc::new(QueryVarRouter::new("amp")),
    )
    .await;
    // 只有中间一项有记录
    seed_validated_url(&app.db, "https://x/?s=", "[]", Utc::now().into(), None).await;

    let (_, body) = get_items(app.router, &app.validate_key).await;
    let items = body.as_array().unwrap();

    let types: Vec<&str> = items.iter().map(|i| i["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["home", "search", "singular"]);

    // 无记录的条目保留，派生三元组整体为 null
    for item in [&items[0], &items[2]] {
        assert!(item["validated_url_post"].is_null());
        assert!(item["validation_errors"].is_null());
        assert!(item["stale"].is_null());
    }
    // 有记录的条目三元组整体有值：已验证零错误
    assert_eq!(items[1]["validation_errors"], serde_json::json!([]));
    assert_eq!(items[1]["stale"], false);
    assert!(items[1]["validated_url_post"].is_object());
}

#[tokio::test]
async fn test_repeated_queries_return_identical_output() {
    let app = spawn_app(
        site_settings(vec![("https://x/sample-post/", "singular", "Post")]),
        Arc::new(QueryVarRouter::new("amp")),
    )
    .await;
    seed_validated_url(
        &app.db,
        "https://x/sample-post/",
        r#"[{"data":{"code":"A"}}]"#,
        Utc::now().into(),
        None,
    )
    .await;

    let (_, first) = get_items(app.router.clone(), &app.validate_key).await;
    let (_, second) = get_items(app.router, &app.validate_key).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_schema_endpoint_is_public_and_describes_the_items() {
    let app = spawn_app(site_settings(vec![]), Arc::new(CanonicalRouter)).await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/v1/scannable-urls/schema")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let schema: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(schema["title"], "amp-scannable-urls");
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("url"));
    assert!(properties.contains_key("amp_url"));
    assert!(properties.contains_key("stale"));
}

#[tokio::test]
async fn test_theme_switch_makes_existing_records_stale() {
    let app = spawn_app(site_settings(vec![]), Arc::new(CanonicalRouter)).await;
    seed_validated_url(&app.db, "https://x/", "[]", Utc::now().into(), None).await;

    // 记录捕获的是 default_fingerprint 的主题，切换站点主题
    crate::helpers::update_site_option(&app.db, "active_theme", "twentytwentyfour").await;

    let (_, body) = get_items(app.router, &app.validate_key).await;

    assert_eq!(body[0]["stale"], true);
    // 指纹与记录一致时则应为新鲜，交叉验证测试前提
    assert_ne!(default_fingerprint().theme_slug, "twentytwentyfour");
}
