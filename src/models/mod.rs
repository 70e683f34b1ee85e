//! # 数据模型模块
//!
//! 定义压缩工作流的核心数据结构。
//!
//! ## 依赖关系
//! - 被 `batch/`, `engine/`, `commands/` 模块使用
//! - 子模块: request, result

pub mod request;
pub mod result;

pub use request::{CompressionRequest, CompressionSettings, Quality};
pub use result::CompressionResult;
