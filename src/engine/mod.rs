//! # 压缩引擎模块
//!
//! 封装对外部 Ghostscript 进程的全部交互。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/` 模块使用
//! - 子模块: args, locate, worker

pub mod args;
pub mod locate;
pub mod worker;

pub use worker::{CompressionWorker, WorkerState};
