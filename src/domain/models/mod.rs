// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 包含系统的核心业务实体：
/// - 可扫描URL（scannable_url）：每次查询重新计算的关联结果项
/// - 验证记录（validation_record）：验证存储中的只读记录及环境指纹
pub mod scannable_url;
pub mod validation_record;
