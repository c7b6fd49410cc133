//! PhotoShelf 存储模块
//!
//! 包含用户聚合的本地快照持久化

pub mod user_store;

pub use user_store::UserStore;
