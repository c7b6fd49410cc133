//! PhotoShelf 错误处理模块
//!
//! 定义应用程序错误类型

use serde::Serialize;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 相册名已存在（不区分大小写）
    #[error("相册名已存在: {0}")]
    DuplicateAlbumName(String),

    /// 照片已有相同标签
    #[error("标签已存在: {0}")]
    DuplicateTag(String),

    /// 照片资源不可用
    #[error("照片资源不可用: {0}")]
    ResourceUnavailable(String),

    /// 相册未找到
    #[error("相册未找到: {0}")]
    AlbumNotFound(String),

    /// 照片未找到
    #[error("照片未找到: {0}")]
    PhotoNotFound(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 通用错误
    #[error("{0}")]
    General(String),
}

/// 用于前端命令返回的错误包装
#[derive(Debug, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::Io(_) => "E_IO_ERROR",
            AppError::Serialization(_) => "E_SERDE_ERROR",
            AppError::DuplicateAlbumName(_) => "E_DUPLICATE_NAME",
            AppError::DuplicateTag(_) => "E_DUPLICATE_TAG",
            AppError::ResourceUnavailable(_) => "E_RESOURCE_UNAVAILABLE",
            AppError::AlbumNotFound(_) => "E_ALBUM_NOT_FOUND",
            AppError::PhotoNotFound(_) => "E_PHOTO_NOT_FOUND",
            AppError::Config(_) => "E_CONFIG",
            AppError::General(_) => "E_GENERAL",
        };

        CommandError {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

// 实现 Serialize 以便可以直接跨前端边界返回
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let cmd_error = CommandError::from(AppError::General(self.to_string()));
        cmd_error.serialize(serializer)
    }
}

/// 应用程序结果类型别名
pub type AppResult<T> = Result<T, AppError>;
