//! 照片数据模型

use serde::{Deserialize, Serialize};

use super::tag::Tag;
use crate::utils::error::{AppError, AppResult};

/// 照片
///
/// 只持有图片数据的定位符（文件路径或内容 URI，核心不解析其内部
/// 结构）和标签列表。系统内照片的身份以定位符字符串相等为准，
/// 而不是实例相等。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// 图片定位符（不透明字符串）
    pub locator: String,
    /// 标签列表（按插入顺序）
    pub tags: Vec<Tag>,
}

impl Photo {
    /// 创建新照片（无标签）
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            tags: Vec::new(),
        }
    }

    /// 添加标签
    ///
    /// 已存在相等标签时返回 `DuplicateTag`，照片保持不变。
    pub fn add_tag(&mut self, tag: Tag) -> AppResult<()> {
        if self.tags.contains(&tag) {
            return Err(AppError::DuplicateTag(tag.to_string()));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// 移除标签
    ///
    /// 标签不存在时为无操作，返回 `false`。
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            true
        } else {
            false
        }
    }

    /// 是否持有相等的标签
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}
