// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scannable_url::{ScannableUrl, UrlValidation, ValidatedUrlPost};
use crate::domain::models::validation_record::EnvironmentFingerprint;
use crate::domain::repositories::paired_routing::PairedUrlRouter;
use crate::domain::repositories::site_state_repository::SiteStateRepository;
use crate::domain::repositories::url_provider::{UrlEntry, UrlProvider};
use crate::domain::repositories::validation_store::{RepositoryError, ValidationStore};
use crate::domain::services::staleness;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// 关联服务
///
/// 把三个独立演化的数据源融合成逐URL的合并视图：
/// URL提供者给出候选条目，配对路由解析AMP URL，
/// 验证存储给出既往验证记录并据此计算陈旧度。
///
/// 服务本身无状态：每次查询独立执行，只读取协作者，
/// 只构造请求局部的 `ScannableUrl` 值。
pub struct CorrelationService {
    provider: Arc<dyn UrlProvider>,
    router: Arc<dyn PairedUrlRouter>,
    store: Arc<dyn ValidationStore>,
    site_state: Arc<dyn SiteStateRepository>,
}

impl CorrelationService {
    /// 创建新的关联服务实例
    ///
    /// # 参数
    ///
    /// * `provider` - 候选URL提供者
    /// * `router` - 配对路由策略
    /// * `store` - 验证存储
    /// * `site_state` - 当前环境指纹来源
    pub fn new(
        provider: Arc<dyn UrlProvider>,
        router: Arc<dyn PairedUrlRouter>,
        store: Arc<dyn ValidationStore>,
        site_state: Arc<dyn SiteStateRepository>,
    ) -> Self {
        Self {
            provider,
            router,
            store,
            site_state,
        }
    }

    /// 列出全部可扫描URL
    ///
    /// 对每个候选条目：解析AMP URL、查找验证记录、计算陈旧度，
    /// 合并为一个 `ScannableUrl`。无法解析出URL的条目被丢弃；
    /// 没有验证记录的条目照常输出，派生字段整体缺失。
    /// 输出顺序与提供者顺序一致。
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<ScannableUrl>)` - 按提供者顺序排列的结果
    /// * `Err(RepositoryError)` - 存储访问失败
    pub async fn list_scannable_urls(&self) -> Result<Vec<ScannableUrl>, RepositoryError> {
        // 每次查询取一次指纹，整批共用，保证批内判定一致
        let current_env = self.site_state.current_fingerprint().await?;

        let candidates: Vec<(Url, UrlEntry)> = self
            .provider
            .entries()
            .into_iter()
            .filter_map(|entry| match Self::parse_entry_url(&entry) {
                Some(url) => Some((url, entry)),
                None => {
                    debug!(
                        page_type = %entry.page_type,
                        "Dropping provider entry without a usable URL"
                    );
                    None
                }
            })
            .collect();

        // 逐URL的合并互不依赖，并发展开；join_all 保持提供者顺序
        let items = join_all(
            candidates
                .into_iter()
                .map(|(url, entry)| self.correlate(url, entry, &current_env)),
        )
        .await;

        items.into_iter().collect()
    }

    /// 把一个候选条目与路由和存储关联成结果项
    async fn correlate(
        &self,
        url: Url,
        entry: UrlEntry,
        current_env: &EnvironmentFingerprint,
    ) -> Result<ScannableUrl, RepositoryError> {
        let amp_url = match self.router.add_endpoint(&url) {
            Ok(amp_url) => amp_url,
            Err(e) => {
                // 路由失败是逐项条件：回退到规范URL，条目照常输出
                warn!(url = %url, error = %e, "Paired routing failed, falling back to canonical URL");
                url.clone()
            }
        };

        let validation = self
            .store
            .find_by_url(url.as_str())
            .await?
            .map(|record| UrlValidation {
                errors: record.validation_errors(),
                stale: staleness::is_stale(&record, current_env),
                post: ValidatedUrlPost {
                    id: record.id,
                    edit_link: record.edit_link,
                },
            });

        Ok(ScannableUrl {
            url,
            page_type: entry.page_type,
            label: entry.label,
            amp_url,
            validation,
        })
    }

    /// 从原始条目解析绝对URL；缺失或无法解析时返回 None
    fn parse_entry_url(entry: &UrlEntry) -> Option<Url> {
        entry
            .url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
    }
}
