//! # 批量执行器
//!
//! 按输入顺序逐个压缩文件并聚合结果。批次内刻意不做并行：外部引擎
//! 本身就是瓶颈，顺序执行换来可预测的进度与结果顺序。
//!
//! ## 功能
//! - 严格按输入顺序处理，单文件失败不中断后续文件
//! - 每个文件完成后发布进度事件
//! - 文件之间检查取消标志，已完成的结果不会丢失
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 调用
//! - 使用 `engine/worker.rs` 执行单文件压缩

use crate::engine::CompressionWorker;
use crate::models::{CompressionRequest, CompressionResult, CompressionSettings};

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// 批次进度事件
///
/// 由后台工作线程发布，展示层只读消费。
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// 开始处理第 index 个文件（从 0 计）
    FileStarted {
        index: usize,
        total: usize,
        file_name: String,
    },
    /// 第 index 个文件处理完毕
    FileFinished {
        index: usize,
        total: usize,
        result: CompressionResult,
    },
    /// 整个批次结束（含被取消的批次）
    BatchComplete { total: usize },
}

/// 批次状态
///
/// 只由 `BatchRunner` 写入；展示层通过事件和最终返回值读取。
#[derive(Debug, Default)]
pub struct BatchState {
    results: Vec<CompressionResult>,
    current_index: usize,
    total: usize,
    status: String,
}

impl BatchState {
    fn new(total: usize) -> Self {
        Self {
            results: Vec::with_capacity(total),
            current_index: 0,
            total,
            status: "Starting compression...".to_string(),
        }
    }

    fn push(&mut self, result: CompressionResult) {
        debug_assert!(self.results.len() < self.total);
        self.current_index = self.results.len();
        self.status = format!("Compressing PDF {} of {}...", self.current_index + 1, self.total);
        self.results.push(result);
    }

    /// 结束批次：写入终态状态并复位瞬时计数，便于开始下一批
    fn finish(&mut self, cancelled: bool) {
        self.status = if cancelled {
            "Batch compression cancelled.".to_string()
        } else {
            "Batch compression complete.".to_string()
        };
        self.current_index = 0;
    }

    pub fn results(&self) -> &[CompressionResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }
}

/// 批量执行器
pub struct BatchRunner {
    settings: CompressionSettings,
    worker: CompressionWorker,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(settings: CompressionSettings, worker: CompressionWorker) -> Self {
        Self { settings, worker }
    }

    /// 顺序处理文件列表
    ///
    /// 每个文件完成后通过 `notify` 发布事件；`cancel` 在文件之间检查，
    /// 置位后停止处理剩余文件，已有结果全部保留。
    pub fn run<F>(&self, files: &[PathBuf], cancel: &AtomicBool, mut notify: F) -> BatchState
    where
        F: FnMut(ProgressEvent),
    {
        let total = files.len();
        let mut state = BatchState::new(total);
        let mut cancelled = false;

        for (index, file) in files.iter().enumerate() {
            if cancel.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }

            let request = CompressionRequest::new(file.clone(), self.settings);
            notify(ProgressEvent::FileStarted {
                index,
                total,
                file_name: request.file_name(),
            });

            let result = self.worker.compress(&request);
            state.push(result.clone());
            notify(ProgressEvent::FileFinished { index, total, result });
        }

        state.finish(cancelled);
        notify(ProgressEvent::BatchComplete { total });
        state
    }
}
