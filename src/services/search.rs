//! 标签搜索引擎
//!
//! 对整个 User → Album → Photo → Tag 图的只读线性扫描。
//! 支持的查询形式：
//! - 单谓词：`Person: Al*`
//! - OR 组合：`Person: Al*` 或 `Location: Par*`
//! - AND 组合：`Person: Al*` 且 `Location: Par*`
//!
//! 谓词对照片的匹配规则：照片至少有一个标签，其类别与谓词类别
//! 相等（不区分大小写），且其值以谓词前缀开头（不区分大小写的
//! 前缀匹配，不是全等也不是子串）。

use serde::{Deserialize, Serialize};

use crate::models::{Photo, User};

/// 搜索谓词（类别 + 值前缀）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPredicate {
    /// 标签类别（不区分大小写比较）
    pub category: String,
    /// 标签值前缀（不区分大小写前缀匹配）
    pub value_prefix: String,
}

impl TagPredicate {
    /// 创建新谓词
    pub fn new(category: impl Into<String>, value_prefix: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value_prefix: value_prefix.into(),
        }
    }

    /// 照片是否满足该谓词
    pub fn matches(&self, photo: &Photo) -> bool {
        let category = self.category.to_lowercase();
        let prefix = self.value_prefix.to_lowercase();
        photo.tags.iter().any(|tag| {
            tag.category.to_lowercase() == category && tag.value.to_lowercase().starts_with(&prefix)
        })
    }
}

/// 标签搜索查询
///
/// 组合方式作为枚举携带自身的谓词，OR/AND 缺第二个谓词的
/// 非法状态不可表示。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum TagQuery {
    /// 单谓词
    Single { first: TagPredicate },
    /// 任一谓词匹配
    Or {
        first: TagPredicate,
        second: TagPredicate,
    },
    /// 两个谓词都匹配
    And {
        first: TagPredicate,
        second: TagPredicate,
    },
}

impl TagQuery {
    /// 单谓词查询
    pub fn single(first: TagPredicate) -> Self {
        Self::Single { first }
    }

    /// OR 查询
    pub fn or(first: TagPredicate, second: TagPredicate) -> Self {
        Self::Or { first, second }
    }

    /// AND 查询
    pub fn and(first: TagPredicate, second: TagPredicate) -> Self {
        Self::And { first, second }
    }

    /// 照片是否满足该查询
    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            TagQuery::Single { first } => first.matches(photo),
            TagQuery::Or { first, second } => first.matches(photo) || second.matches(photo),
            TagQuery::And { first, second } => first.matches(photo) && second.matches(photo),
        }
    }
}

/// 在用户的全部相册中搜索匹配照片
///
/// 按相册顺序、相册内照片顺序遍历，返回匹配照片的定位符。
/// 重复定位符只保留首次出现（同一照片被复制到多个相册时
/// 合并为一条结果）。空结果不是错误。
pub fn search_photos(user: &User, query: &TagQuery) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();
    for album in &user.albums {
        for photo in &album.photos {
            if query.matches(photo) && !results.iter().any(|l| l == &photo.locator) {
                results.push(photo.locator.clone());
            }
        }
    }
    results
}
