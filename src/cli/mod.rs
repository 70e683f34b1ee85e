//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `compress`: 批量压缩 PDF
//! - `check`: 检查 Ghostscript 安装与暂存目录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: check, compress

pub mod check;
pub mod compress;

use clap::{Parser, Subcommand};

/// pdfsqueeze - 批量 PDF 压缩工具
#[derive(Parser)]
#[command(name = "pdfsqueeze")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A batch PDF compression tool driving Ghostscript", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compress one or more PDF files with a quality preset
    Compress(compress::CompressArgs),

    /// Check the Ghostscript installation and staging directories
    Check(check::CheckArgs),
}
