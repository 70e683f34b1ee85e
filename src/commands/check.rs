//! # check 命令实现
//!
//! 环境自检：定位 Ghostscript、读取版本号、验证暂存目录可写。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `engine/locate.rs`, `utils/output.rs`

use crate::cli::check::CheckArgs;
use crate::engine::locate::{engine_version, locate_engine};
use crate::error::Result;
use crate::utils::{output, progress};

use std::fs;
use std::path::Path;

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Environment Check");

    let spinner = progress::create_spinner("Locating Ghostscript...");
    let located = locate_engine(args.gs_path.as_deref());
    spinner.finish_and_clear();

    let engine = match located {
        Ok(path) => {
            output::print_success(&format!("Ghostscript: {}", path.display()));
            Some(path)
        }
        Err(e) => {
            output::print_error(&e.to_string());
            None
        }
    };

    if let Some(path) = &engine {
        match engine_version(path) {
            Ok(version) => output::print_success(&format!("Version: {}", version)),
            Err(e) => output::print_warning(&format!("Could not read version: {}", e)),
        }
    }

    let temp_dir = std::env::temp_dir();
    report_writable("Staging directory", &temp_dir);

    if let Some(base) = dirs::data_local_dir() {
        report_writable("Fallback staging directory", &base.join("pdfsqueeze").join("staging"));
    } else {
        output::print_warning("No per-user data directory available for fallback staging");
    }

    if engine.is_none() {
        output::print_warning("Compression will fail per file until Ghostscript is installed");
    }

    Ok(())
}

/// 以写入探针文件的方式验证目录可写
fn report_writable(label: &str, dir: &Path) {
    let probe = dir.join(".pdfsqueeze-probe");
    let writable = fs::create_dir_all(dir).is_ok() && fs::write(&probe, b"").is_ok();
    if writable {
        fs::remove_file(&probe).ok();
        output::print_success(&format!("{}: {} (writable)", label, dir.display()));
    } else {
        output::print_warning(&format!("{}: {} (not writable)", label, dir.display()));
    }
}
