//! # check 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the Ghostscript executable (default: search PATH)
    #[arg(long, env = "PDFSQUEEZE_GS")]
    pub gs_path: Option<PathBuf>,
}
