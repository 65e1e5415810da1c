// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 负责领域对象到传输表示之间的投影和响应模式声明
pub mod dto;
