// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use url::Url;

/// 可扫描URL实体
///
/// 表示站点上一个应当接受AMP标记合规检查的URL，
/// 由URL提供者、配对路由和验证存储三个数据源关联而成。
/// 每次查询时重新构建，序列化后即被丢弃，从不持久化。
#[derive(Debug, Clone)]
pub struct ScannableUrl {
    /// 规范URL，三个输入源之间的关联键
    pub url: Url,
    /// 语义类型（如 home、search、singular），仅用于展示和过滤
    pub page_type: String,
    /// 人类可读标签
    pub label: String,
    /// AMP版本可达的URL；AMP规范站点下等于规范URL
    pub amp_url: Url,
    /// 既往验证结果；None 表示该URL从未被验证过
    ///
    /// 三个派生字段（错误列表、记录引用、陈旧标志）整体封装在
    /// 这个 Option 里，保证它们要么全部存在、要么全部缺失
    pub validation: Option<UrlValidation>,
}

/// 既往验证运行的合并视图
#[derive(Debug, Clone)]
pub struct UrlValidation {
    /// 验证记录引用
    pub post: ValidatedUrlPost,
    /// 上次验证记录的错误描述列表；空列表表示"已验证，零错误"
    pub errors: Vec<serde_json::Value>,
    /// 记录是否已不再反映当前内容/配置状态
    pub stale: bool,
}

/// 验证记录引用
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedUrlPost {
    /// 记录唯一标识符
    pub id: i64,
    /// 记录编辑链接
    pub edit_link: String,
}
