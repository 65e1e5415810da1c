// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// sea-orm实体定义：
/// - validated_url：验证器写入的逐URL验证记录
/// - site_option：陈旧度判定依赖的站点状态键值对
/// - api_key：能力门禁使用的API密钥
pub mod api_key;
pub mod site_option;
pub mod validated_url;
