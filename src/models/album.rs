//! 相册数据模型

use serde::{Deserialize, Serialize};

use super::photo::Photo;

/// 相册
///
/// 有序的照片集合。成员资格按定位符相等去重：同一相册内
/// 不会出现两张定位符相同的照片。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// 相册名（在同一用户内不区分大小写唯一，由 User 保证）
    pub name: String,
    /// 照片列表（按添加顺序）
    pub photos: Vec<Photo>,
}

impl Album {
    /// 创建新相册（无照片）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
        }
    }

    /// 添加照片
    ///
    /// 相册中已有相同定位符的照片时为无操作，返回 `false`。
    pub fn add_photo(&mut self, photo: Photo) -> bool {
        if self.contains_locator(&photo.locator) {
            return false;
        }
        self.photos.push(photo);
        true
    }

    /// 按定位符移除照片
    ///
    /// 照片不存在时为无操作，返回 `false`。
    pub fn remove_photo(&mut self, locator: &str) -> bool {
        if let Some(pos) = self.photos.iter().position(|p| p.locator == locator) {
            self.photos.remove(pos);
            true
        } else {
            false
        }
    }

    /// 是否包含指定定位符的照片
    pub fn contains_locator(&self, locator: &str) -> bool {
        self.photos.iter().any(|p| p.locator == locator)
    }

    /// 按定位符查找照片
    pub fn photo_by_locator(&self, locator: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.locator == locator)
    }

    /// 按定位符查找照片（可变）
    pub fn photo_by_locator_mut(&mut self, locator: &str) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|p| p.locator == locator)
    }
}
