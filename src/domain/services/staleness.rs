// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::validation_record::{EnvironmentFingerprint, ValidationRecord};

/// 判断验证记录是否陈旧
///
/// 记录陈旧意味着其结论不再反映当前内容或站点配置。按优先级
/// 逐条评估，首个命中即短路：
///
/// 1. 记录覆盖的内容在指纹捕获之后被修改过
/// 2. 激活主题发生变化
/// 3. 激活插件集合发生变化
/// 4. 记录依赖的选项/来源（启用的区块类型、全局样式表）发生变化
///
/// 这是 (记录, 当前指纹) 的纯函数：不触发重新验证，不读取
/// 任何全局状态，相同输入必然得到相同结果。
///
/// # 参数
///
/// * `record` - 验证存储中的记录
/// * `current` - 查询开始时取得的当前环境指纹
///
/// # 返回值
///
/// 记录是否陈旧
pub fn is_stale(record: &ValidationRecord, current: &EnvironmentFingerprint) -> bool {
    if let Some(modified_at) = record.content_modified_at {
        if modified_at > record.captured_at {
            return true;
        }
    }

    if record.captured_env.theme_slug != current.theme_slug {
        return true;
    }

    if record.captured_env.plugins_digest != current.plugins_digest {
        return true;
    }

    if record.captured_env.block_types_digest != current.block_types_digest {
        return true;
    }

    record.captured_env.stylesheet_digest != current.stylesheet_digest
}
