//! 标签数据模型

use serde::{Deserialize, Serialize};

/// 标签
///
/// 不可变的键值对（如 `Person` / `Alice`）。相等性按类别和值
/// 精确比较（区分大小写），用于照片上的重复标签检测。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// 标签类别（如 "Person"、"Location"）
    pub category: String,
    /// 标签值
    pub value: String,
}

impl Tag {
    /// 创建新标签
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.value)
    }
}
