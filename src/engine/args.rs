//! # Ghostscript 参数构造
//!
//! 从压缩配置构造引擎命令行参数。参数顺序固定，部分 Ghostscript 版本
//! 对标志顺序敏感，元数据相关标志必须出现在 `-sOutputFile=` 之前。
//!
//! ## 依赖关系
//! - 被 `engine/worker.rs` 使用
//! - 使用 `models/request.rs` 的配置类型

use crate::models::{CompressionSettings, Quality};
use std::path::{Path, PathBuf};

/// 输出文件名的固定后缀（插入在原扩展名之前）
pub const OUTPUT_SUFFIX: &str = "compressed";

/// 质量预设到 `-dPDFSETTINGS` 档位的映射
pub fn preset_to_token(quality: Quality) -> &'static str {
    match quality {
        Quality::Screen => "/screen",
        Quality::Ebook => "/ebook",
        Quality::Printer => "/printer",
        Quality::Prepress => "/prepress",
        Quality::Default => "/default",
    }
}

/// 由输入路径推导输出路径
///
/// `report.pdf` -> `report.compressed.pdf`。`out_dir` 为 None 时输出到
/// 输入文件所在目录，永远不会与输入路径相同。
pub fn output_path_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pdf".to_string());

    let file_name = format!("{}.{}.{}", stem, OUTPUT_SUFFIX, ext);

    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(file_name)
}

/// 构造完整的 Ghostscript 参数列表
///
/// 基础参数顺序与原始行为保持一致；`remove_metadata` 为 true 时在质量
/// 档位之后插入恰好两个额外标志。
pub fn build_args(staged_input: &Path, output: &Path, settings: &CompressionSettings) -> Vec<String> {
    let mut args = vec![
        "-sDEVICE=pdfwrite".to_string(),
        "-dCompatibilityLevel=1.4".to_string(),
        format!("-dPDFSETTINGS={}", preset_to_token(settings.quality)),
        "-dNOPAUSE".to_string(),
        "-dQUIET".to_string(),
        "-dBATCH".to_string(),
        format!("-sOutputFile={}", output.display()),
        staged_input.display().to_string(),
    ];

    if settings.remove_metadata {
        args.insert(3, "-dDetectDuplicateImages=true".to_string());
        args.insert(4, "-dRemoveMetadata=true".to_string());
    }

    args
}
