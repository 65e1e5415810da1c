// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 原始候选URL条目
///
/// 提供者产出的未经校验的条目。缺失URL的条目属于
/// 格式错误，会在关联阶段被丢弃而不是向上传播。
#[derive(Debug, Clone)]
pub struct UrlEntry {
    /// 候选URL原文，可能缺失或无法解析
    pub url: Option<String>,
    /// 语义类型（如 home、search、singular）
    pub page_type: String,
    /// 人类可读标签
    pub label: String,
}

/// URL提供者特质
///
/// 产出一个有序的候选URL条目序列。实现方负责按URL去重；
/// 空序列是合法结果。枚举过程中不允许失败暴露给调用方。
pub trait UrlProvider: Send + Sync {
    /// 按提供者顺序返回全部候选条目
    fn entries(&self) -> Vec<UrlEntry>;
}
