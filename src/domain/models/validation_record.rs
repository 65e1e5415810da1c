// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use sha2::{Digest, Sha256};

/// 验证记录
///
/// 验证存储中一个URL最近一次验证运行的只读快照。
/// 记录由外部的验证器写入，本核心只读取，从不修改。
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRecord {
    /// 记录唯一标识符
    pub id: i64,
    /// 记录覆盖的规范URL
    pub url: String,
    /// 记录编辑链接
    pub edit_link: String,
    /// 序列化的验证错误列表（JSON数组文本）
    pub error_payload: String,
    /// 验证运行发生的时间
    pub captured_at: DateTime<FixedOffset>,
    /// 验证运行时捕获的站点环境指纹
    pub captured_env: EnvironmentFingerprint,
    /// 该URL背后内容最近一次变更的时间，由内容管道维护；
    /// None 表示内容系统未提供变更标记
    pub content_modified_at: Option<DateTime<FixedOffset>>,
}

impl ValidationRecord {
    /// 反序列化存储的错误列表
    ///
    /// 负载应为对象数组，每个对象的 `data` 成员即为错误描述。
    /// 无法解析或非数组的负载降级为空列表，绝不让单条坏记录
    /// 影响整批结果。
    ///
    /// # 返回值
    ///
    /// 错误描述值的有序列表
    pub fn validation_errors(&self) -> Vec<serde_json::Value> {
        match serde_json::from_str::<serde_json::Value>(&self.error_payload) {
            Ok(serde_json::Value::Array(items)) => items
                .into_iter()
                .map(|item| item.get("data").cloned().unwrap_or(serde_json::Value::Null))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// 站点环境指纹
///
/// 陈旧度判定所依赖的站点状态的显式快照。检查时将记录捕获的
/// 指纹与当前指纹比较，而不是读取任何全局状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentFingerprint {
    /// 当前激活主题的slug
    pub theme_slug: String,
    /// 激活插件集合的摘要
    pub plugins_digest: String,
    /// 启用区块类型集合的摘要
    pub block_types_digest: String,
    /// 全局样式表的摘要
    pub stylesheet_digest: String,
}

impl EnvironmentFingerprint {
    /// 计算字符串集合的稳定摘要
    ///
    /// 先排序再哈希，保证集合顺序不影响结果
    pub fn digest_set<S: AsRef<str>>(items: &[S]) -> String {
        let mut sorted: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
        sorted.sort_unstable();

        let mut hasher = Sha256::new();
        for item in sorted {
            hasher.update(item.as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}
