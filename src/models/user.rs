//! 用户数据模型

use serde::{Deserialize, Serialize};

use super::album::Album;
use crate::utils::error::{AppError, AppResult};

/// 持久化聚合根的默认用户名
pub const DEFAULT_USERNAME: &str = "default";

/// 用户
///
/// 持久化的聚合根：整个 User → Album → Photo → Tag 图作为一个
/// 整体读写。相册名在同一用户内不区分大小写唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 用户名
    pub username: String,
    /// 相册列表（按创建顺序）
    pub albums: Vec<Album>,
}

impl User {
    /// 创建新用户（无相册）
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            albums: Vec::new(),
        }
    }

    /// 按名称查找相册（不区分大小写）
    pub fn album_by_name(&self, name: &str) -> Option<&Album> {
        let lower = name.to_lowercase();
        self.albums.iter().find(|a| a.name.to_lowercase() == lower)
    }

    /// 按名称查找相册（不区分大小写，可变）
    pub fn album_by_name_mut(&mut self, name: &str) -> Option<&mut Album> {
        let lower = name.to_lowercase();
        self.albums
            .iter_mut()
            .find(|a| a.name.to_lowercase() == lower)
    }

    /// 添加相册
    ///
    /// 已存在同名相册（不区分大小写）时返回 `DuplicateAlbumName`。
    pub fn add_album(&mut self, name: impl Into<String>) -> AppResult<&mut Album> {
        let name = name.into();
        if self.album_by_name(&name).is_some() {
            return Err(AppError::DuplicateAlbumName(name));
        }
        self.albums.push(Album::new(name));
        let last = self.albums.len() - 1;
        Ok(&mut self.albums[last])
    }

    /// 重命名相册
    ///
    /// 新名称与*其它*相册冲突（不区分大小写）时返回
    /// `DuplicateAlbumName`；相册本身可以改为仅大小写不同的名称。
    pub fn rename_album(&mut self, name: &str, new_name: &str) -> AppResult<()> {
        let lower = name.to_lowercase();
        let pos = self
            .albums
            .iter()
            .position(|a| a.name.to_lowercase() == lower)
            .ok_or_else(|| AppError::AlbumNotFound(name.to_string()))?;

        let new_lower = new_name.to_lowercase();
        let conflict = self
            .albums
            .iter()
            .enumerate()
            .any(|(i, a)| i != pos && a.name.to_lowercase() == new_lower);
        if conflict {
            return Err(AppError::DuplicateAlbumName(new_name.to_string()));
        }

        self.albums[pos].name = new_name.to_string();
        Ok(())
    }

    /// 移除相册
    ///
    /// 级联删除相册中的全部照片。相册不存在时为无操作，
    /// 返回 `false`。
    pub fn remove_album(&mut self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if let Some(pos) = self
            .albums
            .iter()
            .position(|a| a.name.to_lowercase() == lower)
        {
            self.albums.remove(pos);
            true
        } else {
            false
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME)
    }
}
