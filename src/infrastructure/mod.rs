// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域接口的具体实现和外部服务集成：
/// - 数据库（database）：连接池和实体定义
/// - 仓库实现（repositories）：验证存储和站点状态的sea-orm实现
/// - 提供者（providers）：配置驱动的URL提供者
/// - 指标（metrics）：Prometheus指标导出
pub mod database;
pub mod metrics;
pub mod providers;
pub mod repositories;
