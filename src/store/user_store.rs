//! 用户数据存储
//!
//! 负责整个 User 聚合的读取和保存：单个本地 JSON 快照，
//! 每次变更后整体重写。

use std::fs;
use std::path::PathBuf;

use crate::models::User;
use crate::paths::PathProvider;
use crate::utils::error::{AppError, AppResult};

/// 用户数据存储
pub struct UserStore {
    data_path: PathBuf,
}

impl UserStore {
    /// 使用 PathProvider 创建存储
    pub fn new(provider: &dyn PathProvider) -> AppResult<Self> {
        Self::from_path(provider.user_data_path())
    }

    /// 从指定路径创建存储
    pub fn from_path(data_path: PathBuf) -> AppResult<Self> {
        // 确保父目录存在
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("无法创建数据目录: {}", e)))?;
        }

        Ok(Self { data_path })
    }

    /// 加载用户聚合
    ///
    /// 永不失败：文件不存在、不可读或内容损坏时都返回默认用户。
    /// 快照没有版本字段，不支持格式演进。
    pub fn load(&self) -> User {
        if !self.data_path.exists() {
            tracing::info!("用户数据文件不存在，使用默认用户");
            return User::default();
        }

        let content = match fs::read_to_string(&self.data_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("无法读取用户数据文件: {}，使用默认用户", e);
                return User::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(user) => {
                tracing::info!("成功加载用户数据: {:?}", self.data_path);
                user
            }
            Err(e) => {
                tracing::warn!("用户数据文件格式错误: {}，使用默认用户", e);
                User::default()
            }
        }
    }

    /// 保存用户聚合
    ///
    /// 整体重写快照文件。调用方决定是否关心失败：会话层按
    /// 即发即忘处理（见 `Library`）。
    pub fn save(&self, user: &User) -> AppResult<()> {
        let content = serde_json::to_string_pretty(user)?;
        fs::write(&self.data_path, content)?;

        tracing::info!("成功保存用户数据: {:?}", self.data_path);
        Ok(())
    }

    /// 获取数据文件路径
    pub fn path(&self) -> &PathBuf {
        &self.data_path
    }
}
