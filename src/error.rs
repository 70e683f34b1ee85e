//! # 统一错误处理模块
//!
//! 定义 pdfsqueeze 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pdfsqueeze 统一错误类型
#[derive(Error, Debug)]
pub enum SqueezeError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 压缩引擎错误（逐文件记录，不会中断整个批次）
    // ─────────────────────────────────────────────────────────────
    #[error("Ghostscript binary not found ({hint})")]
    EngineNotFound { hint: String },

    #[error("Failed to stage input to a writable location: {reason}")]
    StagingFailed { reason: String },

    #[error("Failed to launch Ghostscript: {reason}")]
    EngineLaunchFailed { reason: String },

    #[error("Compression failed (exit code: {code}){detail}")]
    EngineExitNonZero { code: i32, detail: String },

    #[error("Ghostscript terminated by a signal")]
    EngineKilled,

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No PDF files found in the given inputs")]
    NoFilesFound,

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SqueezeError>;
