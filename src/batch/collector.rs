//! # 文件收集器
//!
//! 把命令行给出的文件/目录混合输入展开为有序、去重的 PDF 文件列表。
//!
//! ## 功能
//! - 文件按给出顺序保留，目录内容按文件名排序后追加
//! - 按扩展名过滤（大小写不敏感）
//! - 可选递归子目录
//! - 重复路径只保留第一次出现
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Result, SqueezeError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径（文件或目录）
    inputs: Vec<PathBuf>,
    /// 接受的扩展名
    extension: String,
    /// 是否递归子目录
    recursive: bool,
}

impl FileCollector {
    /// 创建新的收集器，默认只接受 .pdf
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            extension: "pdf".to_string(),
            recursive: false,
        }
    }

    /// 设置是否递归搜索目录
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配文件，输入顺序保持不变
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_file() {
                if self.matches_extension(input) && seen.insert(input.clone()) {
                    files.push(input.clone());
                }
            } else if input.is_dir() {
                for path in self.walk_dir(input) {
                    if seen.insert(path.clone()) {
                        files.push(path);
                    }
                }
            } else {
                return Err(SqueezeError::FileNotFound {
                    path: input.display().to_string(),
                });
            }
        }

        if files.is_empty() {
            return Err(SqueezeError::NoFilesFound);
        }
        Ok(files)
    }

    /// 遍历目录并返回排序后的匹配文件
    fn walk_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut found: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| self.matches_extension(p))
            .collect();

        found.sort();
        found
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}
