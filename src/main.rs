//! # pdfsqueeze - 批量 PDF 压缩工具
//!
//! 通过外部 Ghostscript 进程批量压缩 PDF 文件。
//!
//! ## 子命令
//! - `compress` - 按质量预设批量压缩 PDF
//! - `check`    - 检查 Ghostscript 安装与暂存目录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (文件收集、顺序批量执行)
//!   │     ├── engine/   (Ghostscript 定位、参数构造、子进程执行)
//!   │     └── models/   (请求/结果数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod engine;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
