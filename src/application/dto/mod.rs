// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义可扫描URL的线上表示及其JSON Schema
pub mod scannable_url_dto;
