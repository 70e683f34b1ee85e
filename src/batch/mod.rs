//! # 批量处理模块
//!
//! 提供文件收集与顺序批量压缩能力。
//!
//! ## 功能
//! - 展开文件/目录混合输入
//! - 顺序执行与进度事件发布
//! - 结果聚合与统计
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 使用
//! - 使用 `engine/` 执行单文件压缩
//! - 使用 `walkdir` 遍历目录

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, BatchState, ProgressEvent};
