// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use ampscan::config::settings::{ScannableUrlEntrySettings, SiteSettings};
use ampscan::domain::models::validation_record::{EnvironmentFingerprint, ValidationRecord};
use ampscan::domain::repositories::paired_routing::PairedUrlRouter;
use ampscan::domain::repositories::url_provider::{UrlEntry, UrlProvider};
use ampscan::domain::repositories::validation_store::{RepositoryError, ValidationStore};
use ampscan::domain::services::correlation_service::CorrelationService;
use ampscan::infrastructure::database::entities::{api_key, site_option, validated_url};
use ampscan::infrastructure::providers::settings_url_provider::SettingsUrlProvider;
use ampscan::infrastructure::repositories::site_state_repo_impl::SiteStateRepoImpl;
use ampscan::infrastructure::repositories::validation_store_impl::ValidationStoreImpl;
use ampscan::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use ampscan::presentation::routes;
use async_trait::async_trait;
use axum::{middleware, Extension, Router};
use chrono::{DateTime, FixedOffset, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// 测试应用：内存sqlite上的完整路由栈
pub struct TestApp {
    pub router: Router,
    pub db: Arc<DatabaseConnection>,
    /// 具备验证能力的API密钥
    pub validate_key: String,
    /// 不具备验证能力的API密钥
    pub plain_key: String,
}

/// 搭建完整应用：迁移、密钥、站点选项、配置驱动的提供者
pub async fn spawn_app(site: SiteSettings, paired_router: Arc<dyn PairedUrlRouter>) -> TestApp {
    let db = Arc::new(Database::connect("sqlite::memory:").await.unwrap());
    Migrator::up(db.as_ref(), None).await.unwrap();

    let validate_key = seed_api_key(&db, true).await;
    let plain_key = seed_api_key(&db, false).await;
    seed_default_site_options(&db).await;

    let service = Arc::new(CorrelationService::new(
        Arc::new(SettingsUrlProvider::new(&site)),
        paired_router,
        Arc::new(ValidationStoreImpl::new(db.clone())),
        Arc::new(SiteStateRepoImpl::new(db.clone())),
    ));

    let router = build_router(service, db.clone());

    TestApp {
        router,
        db,
        validate_key,
        plain_key,
    }
}

/// 用任意协作者搭建路由栈（门禁仍指向给定数据库）
pub fn build_router(service: Arc<CorrelationService>, db: Arc<DatabaseConnection>) -> Router {
    routes::routes()
        .layer(Extension(service))
        .layer(middleware::from_fn_with_state(
            AuthState { db },
            auth_middleware,
        ))
}

/// 站点配置：首页加上给定条目
pub fn site_settings(entries: Vec<(&str, &str, &str)>) -> SiteSettings {
    SiteSettings {
        home_url: "https://x/".to_string(),
        scannable_urls: entries
            .into_iter()
            .map(|(url, page_type, label)| ScannableUrlEntrySettings {
                url: Some(url.to_string()),
                page_type: Some(page_type.to_string()),
                label: Some(label.to_string()),
            })
            .collect(),
    }
}

pub async fn seed_api_key(db: &DatabaseConnection, can_validate: bool) -> String {
    let key = Uuid::new_v4().to_string();
    api_key::ActiveModel {
        id: Set(Uuid::new_v4()),
        key: Set(key.clone()),
        can_validate: Set(can_validate),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();
    key
}

pub async fn seed_site_option(db: &DatabaseConnection, name: &str, value: &str) {
    site_option::ActiveModel {
        name: Set(name.to_string()),
        value: Set(value.to_string()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();
}

/// 覆盖已存在的站点选项值
pub async fn update_site_option(db: &DatabaseConnection, name: &str, value: &str) {
    site_option::ActiveModel {
        name: Set(name.to_string()),
        value: Set(value.to_string()),
        updated_at: Set(Utc::now().into()),
    }
    .save(db)
    .await
    .unwrap();
}

/// 当前站点状态，与 `seed_validated_url` 捕获的指纹一致，
/// 使未变更的记录保持新鲜
pub async fn seed_default_site_options(db: &DatabaseConnection) {
    seed_site_option(db, "active_theme", "twentytwenty").await;
    seed_site_option(db, "active_plugins", r#"["amp","jetpack"]"#).await;
    seed_site_option(db, "enabled_block_types", r#"["core/paragraph"]"#).await;
    seed_site_option(db, "global_stylesheet_hash", "abc123").await;
}

/// 与 `seed_default_site_options` 相同状态的指纹
pub fn default_fingerprint() -> EnvironmentFingerprint {
    EnvironmentFingerprint {
        theme_slug: "twentytwenty".to_string(),
        plugins_digest: EnvironmentFingerprint::digest_set(&["amp", "jetpack"]),
        block_types_digest: EnvironmentFingerprint::digest_set(&["core/paragraph"]),
        stylesheet_digest: "abc123".to_string(),
    }
}

/// 写入一条验证记录，环境指纹与默认站点选项一致
///
/// # 返回值
///
/// 记录的数据库ID
pub async fn seed_validated_url(
    db: &DatabaseConnection,
    url: &str,
    error_payload: &str,
    captured_at: DateTime<FixedOffset>,
    content_modified_at: Option<DateTime<FixedOffset>>,
) -> i64 {
    let fingerprint = default_fingerprint();
    let model = validated_url::ActiveModel {
        url: Set(url.to_string()),
        edit_link: Set(format!("{}wp-admin/", url)),
        error_payload: Set(error_payload.to_string()),
        captured_at: Set(captured_at),
        theme_slug: Set(fingerprint.theme_slug),
        plugins_digest: Set(fingerprint.plugins_digest),
        block_types_digest: Set(fingerprint.block_types_digest),
        stylesheet_digest: Set(fingerprint.stylesheet_digest),
        content_modified_at: Set(content_modified_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    model.id
}

/// 计数URL提供者：记录被调用的次数，用于断言授权短路
pub struct CountingProvider {
    pub entries: Vec<UrlEntry>,
    pub calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(entries: Vec<UrlEntry>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }
}

impl UrlProvider for CountingProvider {
    fn entries(&self) -> Vec<UrlEntry> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.clone()
    }
}

/// 计数验证存储：记录被调用的次数，用于断言授权短路
pub struct CountingStore {
    pub records: Vec<ValidationRecord>,
    pub calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(records: Vec<ValidationRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ValidationStore for CountingStore {
    async fn find_by_url(&self, url: &str) -> Result<Option<ValidationRecord>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.iter().find(|r| r.url == url).cloned())
    }
}
