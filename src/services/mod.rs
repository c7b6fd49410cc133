//! PhotoShelf 服务模块
//!
//! 包含照片库会话和标签搜索引擎

pub mod library;
pub mod search;

// 重新导出常用类型
pub use library::Library;
pub use search::{search_photos, TagPredicate, TagQuery};
