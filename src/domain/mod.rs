// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：可扫描URL与验证记录等核心数据结构
/// - 仓库接口（repositories）：URL提供者、配对路由、验证存储的抽象接口
/// - 服务（services）：关联服务与陈旧度判定规则
///
/// 领域层是系统的核心，不依赖于任何外部实现，
/// 体现了纯粹的业务逻辑和业务规则。
pub mod models;
pub mod repositories;
pub mod services;
