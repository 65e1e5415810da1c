// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// 配对路由错误类型
#[derive(Error, Debug)]
pub enum RoutingError {
    /// URL无法改写（如 cannot-be-a-base 的URL不支持路径后缀）
    #[error("Cannot derive AMP URL for {url}: {reason}")]
    Unroutable {
        /// 无法改写的规范URL
        url: String,
        /// 失败原因
        reason: String,
    },
}

/// 配对路由特质
///
/// 把规范URL映射到其AMP版本可达的URL。失败是逐项的非致命
/// 条件：调用方回退到规范URL本身，绝不因此丢弃条目。
pub trait PairedUrlRouter: Send + Sync {
    /// 为规范URL追加AMP端点
    fn add_endpoint(&self, url: &Url) -> Result<Url, RoutingError>;
}

/// AMP规范站点路由：站点只服务AMP版本，无需配对，恒等映射
#[derive(Debug, Default)]
pub struct CanonicalRouter;

impl PairedUrlRouter for CanonicalRouter {
    fn add_endpoint(&self, url: &Url) -> Result<Url, RoutingError> {
        Ok(url.clone())
    }
}

/// 查询参数路由：在URL上追加 `?{slug}=1` 样式的查询参数
#[derive(Debug)]
pub struct QueryVarRouter {
    slug: String,
}

impl QueryVarRouter {
    /// 创建新的查询参数路由实例
    ///
    /// # 参数
    ///
    /// * `slug` - 查询参数名（如 "amp"）
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

impl PairedUrlRouter for QueryVarRouter {
    fn add_endpoint(&self, url: &Url) -> Result<Url, RoutingError> {
        let mut amp_url = url.clone();
        amp_url.query_pairs_mut().append_pair(&self.slug, "1");
        Ok(amp_url)
    }
}

/// 路径后缀路由：在URL路径末尾追加 `/{suffix}/` 段
#[derive(Debug)]
pub struct PathSuffixRouter {
    suffix: String,
}

impl PathSuffixRouter {
    /// 创建新的路径后缀路由实例
    ///
    /// # 参数
    ///
    /// * `suffix` - 路径段名（如 "amp"）
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl PairedUrlRouter for PathSuffixRouter {
    fn add_endpoint(&self, url: &Url) -> Result<Url, RoutingError> {
        let mut amp_url = url.clone();
        {
            let mut segments = amp_url
                .path_segments_mut()
                .map_err(|_| RoutingError::Unroutable {
                    url: url.to_string(),
                    reason: "URL cannot be a base".to_string(),
                })?;
            // 保持尾部斜杠约定：/a/b/ 变成 /a/b/amp/
            segments.pop_if_empty().push(&self.suffix).push("");
        }
        Ok(amp_url)
    }
}

/// 根据路由模式构造配对路由实例
///
/// 未知模式回退到查询参数路由。`legacy_transitional` 是
/// 兼容模式：行为同查询参数路由，但参数名固定为 `amp`，
/// 不受 `query_var` 配置影响。
///
/// # 参数
///
/// * `mode` - 路由模式 (canonical, query_var, path_suffix, legacy_transitional)
/// * `query_var` - 查询参数名（mode=query_var 时使用，缺省 "amp"）
/// * `path_suffix` - 路径段名（mode=path_suffix 时使用，缺省 "amp"）
pub fn router_for_mode(
    mode: &str,
    query_var: Option<&str>,
    path_suffix: Option<&str>,
) -> Arc<dyn PairedUrlRouter> {
    match mode {
        "canonical" => Arc::new(CanonicalRouter),
        "path_suffix" => Arc::new(PathSuffixRouter::new(path_suffix.unwrap_or("amp"))),
        "legacy_transitional" => Arc::new(QueryVarRouter::new("amp")),
        _ => Arc::new(QueryVarRouter::new(query_var.unwrap_or("amp"))),
    }
}
