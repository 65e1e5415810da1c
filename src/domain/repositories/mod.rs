// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义关联服务依赖的三个协作者接口及站点状态接口：
/// - URL提供者（url_provider）：产出候选URL条目
/// - 配对路由（paired_routing）：规范URL到AMP URL的映射策略
/// - 验证存储（validation_store）：按URL查找既往验证记录
/// - 站点状态（site_state_repository）：当前环境指纹的来源
pub mod paired_routing;
pub mod site_state_repository;
pub mod url_provider;
pub mod validation_store;
