//! # 压缩请求数据模型
//!
//! 定义质量预设、批次共享配置与单文件压缩请求。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `engine/` 模块使用
//! - 使用 `clap::ValueEnum` 供 CLI 直接解析

use clap::ValueEnum;
use std::path::PathBuf;

/// Ghostscript 质量预设
///
/// 与 `-dPDFSETTINGS` 的五个固定档位一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Quality {
    /// Lowest quality, smallest size (72 dpi images)
    Screen,
    /// Good quality, small size
    #[default]
    Ebook,
    /// High quality, larger size
    Printer,
    /// Highest quality, largest size
    Prepress,
    /// Engine default settings
    Default,
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quality::Screen => write!(f, "screen"),
            Quality::Ebook => write!(f, "ebook"),
            Quality::Printer => write!(f, "printer"),
            Quality::Prepress => write!(f, "prepress"),
            Quality::Default => write!(f, "default"),
        }
    }
}

/// 批次共享的压缩配置
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressionSettings {
    /// 质量预设
    pub quality: Quality,
    /// 是否移除 PDF 元数据（作者、标题、创建日期等）
    pub remove_metadata: bool,
}

/// 单文件压缩请求
///
/// 批次开始时为每个输入文件创建一个，创建后不可变。
#[derive(Debug, Clone)]
pub struct CompressionRequest {
    /// 输入文件路径
    pub input: PathBuf,
    /// 批次共享配置
    pub settings: CompressionSettings,
}

impl CompressionRequest {
    /// 创建新的压缩请求
    pub fn new(input: PathBuf, settings: CompressionSettings) -> Self {
        Self { input, settings }
    }

    /// 输入文件名（不含目录）
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}
