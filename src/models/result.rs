//! # 压缩结果数据模型
//!
//! 单文件压缩结果：成功时记录压缩后大小与输出路径，失败时记录错误信息，
//! 二者互斥。私有字段 + 构造函数保证该不变量无法被外部破坏。
//!
//! ## 依赖关系
//! - 被 `engine/worker.rs` 创建，`batch/runner.rs` 聚合
//! - 被 `commands/compress.rs` 读取用于展示与 CSV 导出

use std::path::{Path, PathBuf};

/// 单文件压缩结果
///
/// 恰好满足以下二者之一：
/// - 成功：`compressed_size` 与 `output_path` 均为 Some，`error` 为 None
/// - 失败：`error` 为 Some，`compressed_size` 与 `output_path` 均为 None
#[derive(Debug, Clone)]
pub struct CompressionResult {
    file_name: String,
    original_size: u64,
    compressed_size: Option<u64>,
    output_path: Option<PathBuf>,
    error: Option<String>,
}

impl CompressionResult {
    /// 构造成功结果
    pub fn success(
        file_name: impl Into<String>,
        original_size: u64,
        compressed_size: u64,
        output_path: PathBuf,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            original_size,
            compressed_size: Some(compressed_size),
            output_path: Some(output_path),
            error: None,
        }
    }

    /// 构造失败结果
    pub fn failure(file_name: impl Into<String>, original_size: u64, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            original_size,
            compressed_size: None,
            output_path: None,
            error: Some(error.into()),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn original_size(&self) -> u64 {
        self.original_size
    }

    pub fn compressed_size(&self) -> Option<u64> {
        self.compressed_size
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// 压缩率字符串，如 "40.0%"；失败或原始大小为 0 时返回 "-"
    pub fn ratio_string(&self) -> String {
        match self.compressed_size {
            Some(compressed) if self.error.is_none() && self.original_size > 0 => {
                let percent = 100.0 * (1.0 - compressed as f64 / self.original_size as f64);
                format!("{:.1}%", percent)
            }
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_error() {
        let r = CompressionResult::success("a.pdf", 100, 60, PathBuf::from("a.compressed.pdf"));
        assert!(r.is_success());
        assert_eq!(r.compressed_size(), Some(60));
        assert!(r.error().is_none());
        assert_eq!(r.output_path(), Some(Path::new("a.compressed.pdf")));
    }

    #[test]
    fn test_failure_has_no_size() {
        let r = CompressionResult::failure("a.pdf", 100, "boom");
        assert!(!r.is_success());
        assert!(r.compressed_size().is_none());
        assert!(r.output_path().is_none());
        assert_eq!(r.error(), Some("boom"));
    }

    #[test]
    fn test_ratio_string_40_percent() {
        let r = CompressionResult::success("a.pdf", 1000, 600, PathBuf::from("a.compressed.pdf"));
        assert_eq!(r.ratio_string(), "40.0%");
    }

    #[test]
    fn test_ratio_string_on_failure() {
        let r = CompressionResult::failure("a.pdf", 1000, "boom");
        assert_eq!(r.ratio_string(), "-");
    }

    #[test]
    fn test_ratio_string_zero_original() {
        let r = CompressionResult::success("a.pdf", 0, 0, PathBuf::from("a.compressed.pdf"));
        assert_eq!(r.ratio_string(), "-");
    }
}
