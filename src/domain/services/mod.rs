// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 关联服务（correlation_service）：把URL提供者、配对路由和
///   验证存储三个数据源合并成逐URL的结构化结果
/// - 陈旧度判定（staleness）：判断既往验证记录是否仍可信的纯函数规则
pub mod correlation_service;
pub mod staleness;
