// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 处理HTTP请求和响应：
/// - 错误（errors）：统一的错误响应转换
/// - 处理器（handlers）：可扫描URL查询和模式描述端点
/// - 中间件（middleware）：能力门禁
/// - 路由（routes）：路由装配
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
