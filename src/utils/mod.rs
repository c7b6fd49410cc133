//! PhotoShelf 工具模块
//!
//! 包含错误类型和通用工具

pub mod error;

pub use error::*;
