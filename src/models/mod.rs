//! PhotoShelf 数据模型模块
//!
//! 包含 User → Album → Photo → Tag 聚合的全部数据结构定义

pub mod album;
pub mod photo;
pub mod tag;
pub mod user;

// 重新导出常用类型
pub use album::Album;
pub use photo::Photo;
pub use tag::Tag;
pub use user::{User, DEFAULT_USERNAME};
