//! # compress 命令实现
//!
//! 批量压缩的编排层：收集文件，在后台线程运行批次，主线程消费进度
//! 事件驱动进度条，最后展示结果表格并可选导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/compress.rs` 定义的参数
//! - 使用 `batch/`, `engine/`, `utils/`

use crate::batch::{BatchRunner, BatchState, FileCollector, ProgressEvent};
use crate::cli::compress::CompressArgs;
use crate::engine::CompressionWorker;
use crate::error::{Result, SqueezeError};
use crate::models::{CompressionResult, CompressionSettings};
use crate::utils::format::format_size;
use crate::utils::{output, progress};

use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};
use std::thread;
use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Compressed")]
    compressed: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// CSV 导出行
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    file: &'a str,
    original_bytes: u64,
    compressed_bytes: Option<u64>,
    output_path: Option<String>,
    saved: String,
    error: Option<&'a str>,
}

/// 执行 compress 命令
pub fn execute(args: CompressArgs) -> Result<()> {
    output::print_header("Batch PDF Compression");

    let files = FileCollector::new(args.inputs.clone())
        .recursive(args.recursive)
        .collect()?;
    output::print_info(&format!("Found {} PDF file(s)", files.len()));
    output::print_info(&format!(
        "Quality: {}, remove metadata: {}",
        args.quality, args.remove_metadata
    ));

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir).map_err(|e| SqueezeError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    let settings = CompressionSettings {
        quality: args.quality,
        remove_metadata: args.remove_metadata,
    };
    let worker = CompressionWorker::new(args.gs_path.clone(), args.output_dir.clone(), args.keep_staged);
    let runner = BatchRunner::new(settings, worker);

    // 后台线程顺序跑批次，主线程只读事件流更新进度条
    let (tx, rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_bg = Arc::clone(&cancel);
    let batch_files = files.clone();
    let handle = thread::spawn(move || {
        runner.run(&batch_files, &cancel_bg, |event| {
            tx.send(event).ok();
        })
    });

    let pb = progress::create_progress_bar(files.len() as u64, "Compressing");
    for event in rx {
        match event {
            ProgressEvent::FileStarted { file_name, .. } => pb.set_message(file_name),
            ProgressEvent::FileFinished { .. } => pb.inc(1),
            ProgressEvent::BatchComplete { .. } => {}
        }
    }
    pb.finish_and_clear();

    let state = handle
        .join()
        .map_err(|_| SqueezeError::Other("batch worker thread panicked".to_string()))?;

    print_results_table(&state);

    if let Some(csv_path) = &args.output_csv {
        save_results_csv(state.results(), csv_path)?;
        output::print_success(&format!("Result list saved to '{}'", csv_path.display()));
    }

    if let Some(dir) = &args.output_dir {
        output::print_info(&format!("Compressed files written to '{}'", dir.display()));
    } else {
        output::print_info("Compressed files written next to the originals with a .compressed.pdf suffix");
    }

    output::print_separator();
    output::print_done(&format!(
        "{} {}/{} succeeded, {} failed",
        state.status(),
        state.success_count(),
        state.total(),
        state.failure_count()
    ));

    Ok(())
}

/// 显示结果表格
fn print_results_table(state: &BatchState) {
    let rows: Vec<ResultRow> = state
        .results()
        .iter()
        .map(|r| ResultRow {
            file: r.file_name().to_string(),
            original: format_size(r.original_size()),
            compressed: r.compressed_size().map(format_size).unwrap_or_else(|| "-".to_string()),
            saved: r.ratio_string(),
            status: match r.error() {
                None => "OK".to_string(),
                Some(err) => err.to_string(),
            },
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
}

/// 保存结果到 CSV
fn save_results_csv(results: &[CompressionResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(SqueezeError::CsvError)?;

    for r in results {
        wtr.serialize(CsvRow {
            file: r.file_name(),
            original_bytes: r.original_size(),
            compressed_bytes: r.compressed_size(),
            output_path: r.output_path().map(|p| p.display().to_string()),
            saved: r.ratio_string(),
            error: r.error(),
        })
        .map_err(SqueezeError::CsvError)?;
    }

    wtr.flush().map_err(|e| SqueezeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
