//! # compress 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compress.rs`

use crate::models::Quality;
use clap::Args;
use std::path::PathBuf;

/// compress 子命令参数
#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Input PDF files or directories containing PDFs
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Ghostscript quality preset
    #[arg(short, long, value_enum, default_value = "ebook")]
    pub quality: Quality,

    /// Remove metadata (author, title, creation date) from the PDFs
    #[arg(long, default_value_t = false)]
    pub remove_metadata: bool,

    /// Directory for compressed output (default: next to each input file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path to the Ghostscript executable (default: search PATH)
    #[arg(long, env = "PDFSQUEEZE_GS")]
    pub gs_path: Option<PathBuf>,

    /// Recurse into subdirectories when an input is a directory
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Keep staged working copies instead of deleting them after each file
    #[arg(long, default_value_t = false)]
    pub keep_staged: bool,

    /// Write the full result list to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}
