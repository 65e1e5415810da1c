// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 提供者模块
///
/// URL提供者接口的具体实现
pub mod settings_url_provider;
